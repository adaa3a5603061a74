use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Single-threaded poll/dispatch loop.
///
/// The handler is called with `None` once per tick (the shell redraws
/// there) and with `Some(event)` for every input event. All events already
/// queued are drained before the next tick so a fast mouse drag never lags
/// behind the pointer.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Dispatch every event that is ready right now, without a tick.
    pub fn dispatch_pending<F>(&mut self, handler: &mut F) -> io::Result<ControlFlow>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        while self.driver.poll(Duration::ZERO)? {
            let event = self.driver.read()?;
            if handler(&mut self.driver, Some(event))? == ControlFlow::Quit {
                return Ok(ControlFlow::Quit);
            }
        }
        Ok(ControlFlow::Continue)
    }

    /// Runs until the handler returns `ControlFlow::Quit`.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if handler(&mut self.driver, None)? == ControlFlow::Quit {
                return Ok(());
            }
            if self.driver.poll(self.poll_interval)?
                && self.dispatch_pending(&mut handler)? == ControlFlow::Quit
            {
                return Ok(());
            }
        }
    }
}
