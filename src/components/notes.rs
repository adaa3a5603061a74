use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::components::{Component, ComponentContext};
use crate::ui::UiFrame;

/// Scratch pad: a plain multi-line buffer with a cursor at the end of the
/// last line. Contents live only as long as the window.
#[derive(Debug)]
pub struct NotesComponent {
    lines: Vec<String>,
}

impl Default for NotesComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesComponent {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn current_line(&mut self) -> &mut String {
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }
}

impl Component for NotesComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().fg(ctx.theme().window_fg());
        let view = area.height as usize;
        let skip = self.lines.len().saturating_sub(view);
        for (row, line) in self.lines.iter().skip(skip).enumerate() {
            // keep the tail of long lines visible, where typing happens
            let chars = line.chars().count();
            let shown: String = line
                .chars()
                .skip(chars.saturating_sub(area.width.saturating_sub(1) as usize))
                .collect();
            frame.set_str(area.x, area.y + row as u16, &shown, area.width, style);
        }
        if ctx.focused() {
            let row = (self.lines.len() - skip).saturating_sub(1) as u16;
            let last = self.lines.last().map(|l| l.chars().count()).unwrap_or(0);
            let col = (last as u16).min(area.width.saturating_sub(1));
            frame.set_str(
                area.x + col,
                area.y + row,
                " ",
                1,
                style.add_modifier(Modifier::REVERSED),
            );
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press
            || key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => self.current_line().push(c),
            KeyCode::Enter => self.lines.push(String::new()),
            KeyCode::Backspace => {
                if self.current_line().pop().is_none() && self.lines.len() > 1 {
                    self.lines.pop();
                }
            }
            _ => return false,
        }
        true
    }
}
