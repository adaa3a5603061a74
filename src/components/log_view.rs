use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::components::{Component, ComponentContext};
use crate::logging::{LogBuffer, global_log};
use crate::ui::UiFrame;

const SCROLL_STEP: usize = 3;

/// Tail of the tracing ring buffer. Scrolling back pins the view; End
/// returns to following new lines.
pub struct LogViewComponent {
    buffer: LogBuffer,
    scroll_back: usize,
}

impl Default for LogViewComponent {
    fn default() -> Self {
        Self::new(global_log())
    }
}

impl LogViewComponent {
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            scroll_back: 0,
        }
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    fn scroll(&mut self, up: bool, amount: usize) {
        if up {
            let max = self.buffer.len().saturating_sub(1);
            self.scroll_back = (self.scroll_back + amount).min(max);
        } else {
            self.scroll_back = self.scroll_back.saturating_sub(amount);
        }
    }

    /// Lines visible in a view `height` rows tall.
    pub fn visible_lines(&self, height: usize) -> Vec<String> {
        let mut lines = self.buffer.tail(height + self.scroll_back);
        lines.truncate(lines.len().saturating_sub(self.scroll_back));
        let skip = lines.len().saturating_sub(height);
        lines.split_off(skip)
    }
}

impl Component for LogViewComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().fg(ctx.theme().window_fg());
        let lines = self.visible_lines(area.height as usize);
        if lines.is_empty() {
            frame.set_str(area.x, area.y, "(no log output)", area.width, style);
            return;
        }
        for (row, line) in lines.iter().enumerate() {
            frame.set_str(area.x, area.y + row as u16, line, area.width, style);
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Up => self.scroll(true, 1),
                KeyCode::Down => self.scroll(false, 1),
                KeyCode::PageUp => self.scroll(true, 10),
                KeyCode::PageDown => self.scroll(false, 10),
                KeyCode::End => self.scroll_back = 0,
                _ => return false,
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => self.scroll(true, SCROLL_STEP),
                MouseEventKind::ScrollDown => self.scroll(false, SCROLL_STEP),
                _ => return false,
            },
            _ => return false,
        }
        true
    }
}
