mod drag;
mod focus_ring;
mod registry;
mod stack;

use std::fmt;

use crate::constants::DEFAULT_WORKSPACE;
use crate::geometry::Geometry;

pub use drag::{DragController, DragSession, clamp_drag_position};
pub use focus_ring::FocusRing;
pub use registry::WindowRegistry;
pub use stack::StackController;

/// Stable handle to a window. Handles are allocated in increasing order and
/// never reused, so ordering by handle is ordering by open time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the desktop knows about one open window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    /// Content-provider key resolved through the app catalog.
    pub app: String,
    pub title: String,
    pub icon: String,
    /// Tiled or dragged placement. Maximized windows keep their last stored
    /// geometry here; their displayed placement comes from the viewport.
    pub geometry: Geometry,
    pub minimized: bool,
    pub maximized: bool,
    pub z_index: u64,
    pub workspace: u32,
}

impl WindowRecord {
    pub(crate) fn new(
        id: WindowId,
        app: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id,
            app: app.into(),
            title: title.into(),
            icon: icon.into(),
            geometry: Geometry::default(),
            minimized: false,
            maximized: false,
            z_index: 0,
            workspace: DEFAULT_WORKSPACE,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}
