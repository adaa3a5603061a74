use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Wrap};

use crate::components::{Component, ComponentContext};
use crate::ui::UiFrame;

const ABOUT_TEXT: &str = indoc! {"
    simdesk

    A tiling desktop in your terminal. New windows re-flow the
    screen; drag a title bar to move one around.

    Alt+N  open notes       Alt+W  close window
    Alt+M  minimize         Alt+X  maximize / restore
    Alt+←/→  cycle windows  Ctrl+Q quit

    Click a taskbar entry to bring its window back.
"};

#[derive(Debug, Default)]
pub struct AboutComponent;

impl AboutComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn text() -> &'static str {
        ABOUT_TEXT
    }
}

impl Component for AboutComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        let paragraph = Paragraph::new(ABOUT_TEXT)
            .style(Style::default().fg(ctx.theme().window_fg()))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
