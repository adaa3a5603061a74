#[cfg(test)]
mod tests {
    use std::io;
    use std::time::Duration;

    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use simdesk::apps::AppCatalog;
    use simdesk::drivers::{OutputDriver, ScriptedInputDriver};
    use simdesk::prefs::{FilePreferences, PreferenceStore, THEME_KEY};
    use simdesk::shell::{self, Shell};
    use simdesk::sound::LogCuePlayer;
    use simdesk::ui::{CellScale, UiFrame};

    /// Draws into an in-memory buffer instead of a terminal.
    struct BufferOutput {
        buffer: Buffer,
        entered: bool,
        frames: usize,
    }

    impl BufferOutput {
        fn new(columns: u16, rows: u16) -> Self {
            Self {
                buffer: Buffer::empty(Rect::new(0, 0, columns, rows)),
                entered: false,
                frames: 0,
            }
        }
    }

    impl OutputDriver for BufferOutput {
        type Backend = TestBackend;

        fn enter(&mut self) -> io::Result<()> {
            self.entered = true;
            Ok(())
        }

        fn exit(&mut self) -> io::Result<()> {
            self.entered = false;
            Ok(())
        }

        fn size(&self) -> io::Result<(u16, u16)> {
            Ok((self.buffer.area.width, self.buffer.area.height))
        }

        fn draw<F>(&mut self, f: F) -> io::Result<()>
        where
            F: FnOnce(UiFrame<'_>),
        {
            self.frames += 1;
            let area = self.buffer.area;
            f(UiFrame::from_parts(area, &mut self.buffer));
            Ok(())
        }
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn row_text(buffer: &Buffer, row: u16) -> String {
        (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, row)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn scripted_session_runs_to_quit() {
        let mut shell = Shell::new(
            AppCatalog::builtin(),
            Box::new(simdesk::prefs::MemoryPreferences::new()),
            Box::new(LogCuePlayer),
            CellScale::default(),
            vec!["about".to_string()],
        );
        let input = ScriptedInputDriver::new([
            key(KeyCode::Char('n'), KeyModifiers::ALT),
            key(KeyCode::Char('h'), KeyModifiers::NONE),
            key(KeyCode::Char('q'), KeyModifiers::CONTROL),
        ]);
        let mut output = BufferOutput::new(120, 40);

        shell::run(&mut shell, input, &mut output, Duration::ZERO).expect("run");

        assert!(shell.should_quit());
        assert!(!output.entered);
        assert!(output.frames >= 1);
        assert_eq!(shell.desktop().len(), 2);
        assert!(row_text(&output.buffer, 38).contains("[i About]"));
    }

    #[test]
    fn settings_choice_survives_restart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.conf");

        let store = FilePreferences::open(&path).expect("open");
        let mut shell = Shell::new(
            AppCatalog::builtin(),
            Box::new(store),
            Box::new(LogCuePlayer),
            CellScale::default(),
            vec!["settings".to_string()],
        );
        shell.start(120, 40);
        let settings = shell.desktop().active().expect("settings window");
        let rect = shell.window_rect(settings).expect("visible");
        let mut screen = Buffer::empty(Rect::new(0, 0, 120, 40));
        shell.render(&mut UiFrame::from_parts(screen.area, &mut screen));
        // first menu row, just under the title bar
        shell.handle_event(&click(rect.x + 2, rect.y + 1));

        let reopened = FilePreferences::open(&path).expect("reopen");
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));

        let shell = Shell::new(
            AppCatalog::builtin(),
            Box::new(reopened),
            Box::new(LogCuePlayer),
            CellScale::default(),
            Vec::new(),
        );
        assert_eq!(shell.preferences().theme.as_str(), "light");
    }

    #[test]
    fn resize_event_does_not_retile() {
        let mut shell = Shell::new(
            AppCatalog::builtin(),
            Box::new(simdesk::prefs::MemoryPreferences::new()),
            Box::new(LogCuePlayer),
            CellScale::default(),
            vec!["about".to_string()],
        );
        shell.start(120, 40);
        let id = shell.desktop().active().expect("about");
        let before = shell.desktop().window(id).map(|r| r.geometry);
        shell.handle_event(&Event::Resize(200, 60));
        assert_eq!(shell.desktop().window(id).map(|r| r.geometry), before);
        assert_eq!(shell.desktop().viewport().width, 2000);
    }
}
