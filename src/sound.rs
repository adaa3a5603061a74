//! Audio feedback for lifecycle transitions.
//!
//! Cues are fire-and-forget: players never report failure back to the
//! desktop, and nothing waits on them.

use std::io::Write;

use crate::desktop::DesktopEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Startup,
    Shutdown,
    Open,
    Close,
    Minimize,
    Restore,
    Maximize,
}

impl SoundCue {
    /// Cue for a desktop event. Focus changes are silent.
    pub fn for_event(event: DesktopEvent) -> Option<Self> {
        match event {
            DesktopEvent::Opened(_) => Some(Self::Open),
            DesktopEvent::Closed(_) => Some(Self::Close),
            DesktopEvent::Minimized(_) => Some(Self::Minimize),
            DesktopEvent::Restored(_) | DesktopEvent::Unmaximized(_) => Some(Self::Restore),
            DesktopEvent::Maximized(_) => Some(Self::Maximize),
            DesktopEvent::Focused(_) => None,
        }
    }
}

pub trait CuePlayer {
    fn play(&mut self, cue: SoundCue);
}

/// Drops every cue.
#[derive(Debug, Default)]
pub struct SilentCuePlayer;

impl CuePlayer for SilentCuePlayer {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Records cues in the trace log only.
#[derive(Debug, Default)]
pub struct LogCuePlayer;

impl CuePlayer for LogCuePlayer {
    fn play(&mut self, cue: SoundCue) {
        tracing::trace!(?cue, "sound cue");
    }
}

/// Rings the terminal bell for window opens, closes and session changes.
pub struct BellCuePlayer<W: Write> {
    out: W,
}

impl<W: Write> BellCuePlayer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CuePlayer for BellCuePlayer<W> {
    fn play(&mut self, cue: SoundCue) {
        tracing::trace!(?cue, "sound cue");
        if !matches!(
            cue,
            SoundCue::Open | SoundCue::Close | SoundCue::Startup | SoundCue::Shutdown
        ) {
            return;
        }
        // the terminal may be gone during teardown; a lost bell is fine
        let _ = self.out.write_all(b"\x07");
        let _ = self.out.flush();
    }
}
