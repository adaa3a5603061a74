//! Shared component rendering context
//!
//! `ComponentContext` carries the desktop state a panel may need while
//! rendering or handling input, so the `Component` trait stays stable and
//! panels never reach into the shell.

use crate::theme::{Theme, Wallpaper};

/// Context passed to `Component` trait methods describing UI state.
///
/// - `focused`: whether the hosting window is the active window.
/// - `theme` / `wallpaper`: the current desktop appearance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentContext {
    focused: bool,
    theme: Theme,
    wallpaper: Wallpaper,
}

impl ComponentContext {
    pub const fn new(focused: bool, theme: Theme, wallpaper: Wallpaper) -> Self {
        Self {
            focused,
            theme,
            wallpaper,
        }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub const fn wallpaper(&self) -> Wallpaper {
        self.wallpaper
    }
}
