use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::components::{Component, ComponentContext, MenuComponent, SessionHooks};
use crate::ui::UiFrame;

const ENTRIES: [&str; 3] = ["Shut down", "Restart", "Log out"];

/// Session controls. Does nothing until the shell installs its hooks.
pub struct PowerComponent {
    menu: MenuComponent,
    hooks: Option<SessionHooks>,
}

impl Default for PowerComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerComponent {
    pub fn new() -> Self {
        Self {
            menu: MenuComponent::new(ENTRIES),
            hooks: None,
        }
    }

    pub fn has_hooks(&self) -> bool {
        self.hooks.is_some()
    }

    fn invoke(&mut self, index: usize) {
        let Some(hooks) = self.hooks.as_mut() else {
            tracing::debug!(index, "power entry activated without session hooks");
            return;
        };
        match index {
            0 => hooks.shutdown(),
            1 => hooks.restart(),
            _ => hooks.logout(),
        }
    }
}

impl Component for PowerComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.menu.render(frame, area, ctx);
    }

    fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        let handled = self.menu.handle_event(event, ctx);
        if let Some(index) = self.menu.take_activated() {
            self.invoke(index);
        }
        handled
    }

    fn install_session_hooks(&mut self, hooks: SessionHooks) {
        self.hooks = Some(hooks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn entries_call_matching_hooks() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c) = (log.clone(), log.clone(), log.clone());
        let mut power = PowerComponent::new();
        power.install_session_hooks(SessionHooks::new(
            move || a.borrow_mut().push("shutdown"),
            move || b.borrow_mut().push("restart"),
            move || c.borrow_mut().push("logout"),
        ));
        let ctx = ComponentContext::default();
        power.handle_event(&key(KeyCode::Down), &ctx);
        power.handle_event(&key(KeyCode::Enter), &ctx);
        power.handle_event(&key(KeyCode::Down), &ctx);
        power.handle_event(&key(KeyCode::Enter), &ctx);
        assert_eq!(*log.borrow(), vec!["restart", "logout"]);
    }

    #[test]
    fn without_hooks_activation_is_harmless() {
        let mut power = PowerComponent::new();
        assert!(!power.has_hooks());
        assert!(power.handle_event(&key(KeyCode::Enter), &ComponentContext::default()));
    }
}
