use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::components::{Component, ComponentContext, MenuComponent, ShellRequest};
use crate::ui::UiFrame;

const THEME_ROW: usize = 0;
const WALLPAPER_ROW: usize = 1;

/// Appearance settings. The shell owns the values and persists them; this
/// panel only shows them and asks for changes.
pub struct SettingsComponent {
    menu: MenuComponent,
    pending: Option<ShellRequest>,
}

impl Default for SettingsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsComponent {
    pub fn new() -> Self {
        Self {
            menu: MenuComponent::new(["Theme", "Wallpaper"]),
            pending: None,
        }
    }
}

impl Component for SettingsComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.menu
            .set_item(THEME_ROW, format!("Theme:     {}", ctx.theme()));
        self.menu
            .set_item(WALLPAPER_ROW, format!("Wallpaper: {}", ctx.wallpaper()));
        self.menu.render(frame, area, ctx);
    }

    fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        let handled = self.menu.handle_event(event, ctx);
        self.pending = match self.menu.take_activated() {
            Some(THEME_ROW) => Some(ShellRequest::ToggleTheme),
            Some(WALLPAPER_ROW) => Some(ShellRequest::NextWallpaper),
            _ => self.pending,
        };
        handled
    }

    fn take_request(&mut self) -> Option<ShellRequest> {
        self.pending.take()
    }
}
