//! Pixel-space rectangles and the viewport they live in.

use crate::constants::{
    BOTTOM_RESERVE, MIN_VIEWPORT_HEIGHT, MIN_VIEWPORT_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

/// Window placement in screen pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        if self.width <= 0 || self.height <= 0 {
            return false;
        }
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn intersects(&self, other: &Geometry) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Grow the extent to at least the configured window minimum. The origin is
    /// left untouched.
    pub fn with_min_size(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
            ..self
        }
    }
}

/// Size of the screen the desktop is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Height left over once the taskbar strip is reserved.
    pub fn usable_height(&self) -> i32 {
        self.height - BOTTOM_RESERVE
    }

    /// The viewport raised to the tiling floor on each axis.
    pub fn clamped_for_tiling(self) -> Self {
        Self {
            width: self.width.max(MIN_VIEWPORT_WIDTH),
            height: self.height.max(MIN_VIEWPORT_HEIGHT),
        }
    }

    /// Placement used when a window is maximized. Never written back into a
    /// window record.
    pub fn maximized_geometry(&self) -> Geometry {
        Geometry::new(0, 0, self.width.max(0), self.usable_height().max(0))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(MIN_VIEWPORT_WIDTH, MIN_VIEWPORT_HEIGHT)
    }
}
