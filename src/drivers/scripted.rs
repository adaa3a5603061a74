use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::Event;

use super::InputDriver;

/// Replays a fixed list of events, then reports no more input. Reading past
/// the end is an error.
#[derive(Debug, Default)]
pub struct ScriptedInputDriver {
    events: VecDeque<Event>,
    mouse_capture: Option<bool>,
}

impl ScriptedInputDriver {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            mouse_capture: None,
        }
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    pub fn mouse_capture(&self) -> Option<bool> {
        self.mouse_capture
    }
}

impl InputDriver for ScriptedInputDriver {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        self.mouse_capture = Some(enabled);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn replays_in_order_then_runs_dry() {
        let mut d = ScriptedInputDriver::new([
            Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            Event::Resize(80, 24),
        ]);
        assert!(d.poll(Duration::ZERO).unwrap());
        assert!(matches!(d.read().unwrap(), Event::Key(_)));
        assert!(matches!(d.read().unwrap(), Event::Resize(80, 24)));
        assert!(!d.poll(Duration::ZERO).unwrap());
        assert!(d.read().is_err());
    }

    #[test]
    fn blanket_impl_for_mut_ref_works() {
        let mut d = ScriptedInputDriver::new([Event::FocusGained]);
        let mut r = &mut d;
        assert!(InputDriver::poll(&mut r, Duration::ZERO).unwrap());
        InputDriver::set_mouse_capture(&mut r, true).unwrap();
        assert_eq!(d.mouse_capture(), Some(true));
    }
}
