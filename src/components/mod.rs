use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod about;
pub mod log_view;
pub mod menu;
pub mod notes;
pub mod power;
pub mod settings;

pub use about::AboutComponent;
pub use log_view::LogViewComponent;
pub use menu::MenuComponent;
pub use notes::NotesComponent;
pub use power::PowerComponent;
pub use settings::SettingsComponent;

pub use crate::component_context::ComponentContext;

/// Desktop-level change a panel asks the shell to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellRequest {
    ToggleTheme,
    NextWallpaper,
}

type Hook = Box<dyn FnMut()>;

/// Session callbacks handed to the one privileged panel.
pub struct SessionHooks {
    shutdown: Hook,
    restart: Hook,
    logout: Hook,
}

impl SessionHooks {
    pub fn new(
        shutdown: impl FnMut() + 'static,
        restart: impl FnMut() + 'static,
        logout: impl FnMut() + 'static,
    ) -> Self {
        Self {
            shutdown: Box::new(shutdown),
            restart: Box::new(restart),
            logout: Box::new(logout),
        }
    }

    pub fn shutdown(&mut self) {
        (self.shutdown)()
    }

    pub fn restart(&mut self) {
        (self.restart)()
    }

    pub fn logout(&mut self) {
        (self.logout)()
    }
}

impl std::fmt::Debug for SessionHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionHooks")
    }
}

pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> bool {
        false
    }

    /// Pending request for the shell, drained after each handled event.
    fn take_request(&mut self) -> Option<ShellRequest> {
        None
    }

    /// Only called for privileged providers.
    fn install_session_hooks(&mut self, _hooks: SessionHooks) {}
}
