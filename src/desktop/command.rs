use super::Desktop;
use crate::geometry::Viewport;
use crate::window::WindowId;

/// One shell command, as accepted by [`Desktop::apply`].
///
/// Recording commands and feeding them back through [`replay`] reproduces the
/// exact desktop state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopCommand {
    Create {
        app: String,
        title: String,
        icon: String,
    },
    Close(WindowId),
    Minimize(WindowId),
    Maximize(WindowId),
    Focus(WindowId),
    FocusNext {
        forward: bool,
    },
    StartDrag {
        id: WindowId,
        offset_x: i32,
        offset_y: i32,
    },
    /// Absolute pointer position, not a delta.
    Move {
        id: WindowId,
        x: i32,
        y: i32,
    },
    Drag {
        x: i32,
        y: i32,
    },
    EndDrag,
    Resize(Viewport),
}

impl DesktopCommand {
    pub fn create(
        app: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self::Create {
            app: app.into(),
            title: title.into(),
            icon: icon.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Created(WindowId),
    Applied,
    /// The command referenced a missing window or had nothing to act on.
    Ignored,
}

impl CommandOutcome {
    fn from_applied(applied: bool) -> Self {
        if applied { Self::Applied } else { Self::Ignored }
    }

    pub fn created(self) -> Option<WindowId> {
        match self {
            Self::Created(id) => Some(id),
            _ => None,
        }
    }
}

impl Desktop {
    pub fn apply(&mut self, command: DesktopCommand) -> CommandOutcome {
        match command {
            DesktopCommand::Create { app, title, icon } => {
                CommandOutcome::Created(self.create_window(app, title, icon))
            }
            DesktopCommand::Close(id) => CommandOutcome::from_applied(self.close_window(id)),
            DesktopCommand::Minimize(id) => {
                CommandOutcome::from_applied(self.minimize_window(id))
            }
            DesktopCommand::Maximize(id) => {
                CommandOutcome::from_applied(self.maximize_window(id))
            }
            DesktopCommand::Focus(id) => CommandOutcome::from_applied(self.focus_window(id)),
            DesktopCommand::FocusNext { forward } => {
                CommandOutcome::from_applied(self.focus_next(forward).is_some())
            }
            DesktopCommand::StartDrag {
                id,
                offset_x,
                offset_y,
            } => CommandOutcome::from_applied(self.start_drag(id, offset_x, offset_y)),
            DesktopCommand::Move { id, x, y } => {
                CommandOutcome::from_applied(self.move_window(id, x, y))
            }
            DesktopCommand::Drag { x, y } => CommandOutcome::from_applied(self.drag(x, y)),
            DesktopCommand::EndDrag => CommandOutcome::from_applied(self.end_drag()),
            DesktopCommand::Resize(viewport) => {
                self.set_viewport(viewport);
                CommandOutcome::Applied
            }
        }
    }
}

/// Build a desktop by applying `commands` in order to an empty one.
pub fn replay<I>(viewport: Viewport, commands: I) -> Desktop
where
    I: IntoIterator<Item = DesktopCommand>,
{
    let mut desktop = Desktop::new(viewport);
    for command in commands {
        desktop.apply(command);
    }
    desktop
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_reports_new_id() {
        let mut d = Desktop::new(Viewport::new(1200, 800));
        let outcome = d.apply(DesktopCommand::create("about", "About", "i"));
        let id = outcome.created().expect("created");
        assert_eq!(d.active(), Some(id));
    }

    #[test]
    fn stale_commands_are_ignored() {
        let mut d = Desktop::new(Viewport::new(1200, 800));
        let ghost = WindowId::new(5);
        assert_eq!(d.apply(DesktopCommand::Close(ghost)), CommandOutcome::Ignored);
        assert_eq!(d.apply(DesktopCommand::EndDrag), CommandOutcome::Ignored);
        assert_eq!(
            d.apply(DesktopCommand::Drag { x: 1, y: 1 }),
            CommandOutcome::Ignored
        );
    }

    #[test]
    fn resize_does_not_retile() {
        let mut d = Desktop::new(Viewport::new(1200, 800));
        let id = d
            .apply(DesktopCommand::create("about", "About", ""))
            .created()
            .expect("created");
        let before = d.window(id).map(|r| r.geometry);
        d.apply(DesktopCommand::Resize(Viewport::new(1600, 900)));
        assert_eq!(d.window(id).map(|r| r.geometry), before);
        assert_eq!(d.viewport(), Viewport::new(1600, 900));
    }

    #[test]
    fn replay_is_deterministic() {
        let script = vec![
            DesktopCommand::create("a", "A", ""),
            DesktopCommand::create("b", "B", ""),
            DesktopCommand::StartDrag {
                id: WindowId::new(1),
                offset_x: 4,
                offset_y: 4,
            },
            DesktopCommand::Drag { x: 300, y: 200 },
            DesktopCommand::EndDrag,
            DesktopCommand::Minimize(WindowId::new(2)),
        ];
        let first = replay(Viewport::new(1200, 800), script.clone());
        let second = replay(Viewport::new(1200, 800), script);
        let a: Vec<_> = first.windows().cloned().collect();
        let b: Vec<_> = second.windows().cloned().collect();
        assert_eq!(a, b);
        assert_eq!(first.active(), second.active());
    }
}
