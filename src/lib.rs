//! A simulated tiling desktop.
//!
//! The engine ([`desktop::Desktop`] and the [`window`] and [`layout`]
//! modules) is plain state with no terminal dependency. Everything else
//! hosts it in a terminal: panels, chrome, input drivers and the shell.

pub mod apps;
pub mod component_context;
pub mod components;
pub mod config;
pub mod constants;
pub mod decorator;
pub mod desktop;
pub mod drivers;
pub mod event_loop;
pub mod geometry;
pub mod keybindings;
pub mod layout;
pub mod logging;
pub mod prefs;
pub mod shell;
pub mod sound;
pub mod theme;
pub mod ui;
pub mod window;

pub use desktop::{CommandOutcome, Desktop, DesktopCommand, DesktopEvent};
pub use geometry::{Geometry, Viewport};
pub use window::{WindowId, WindowRecord};
