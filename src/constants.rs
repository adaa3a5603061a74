//! Shared crate-wide constants.
//!
//! All geometry values are in screen pixels with a top-left origin.

/// Gap between the viewport edge and the outermost tiled windows, and between
/// adjacent tiled windows.
pub const GUTTER: i32 = 20;

/// Inset used for the one- and two-window layouts' top edge.
pub const TOP_OFFSET: i32 = 50;

/// Height of the strip reserved at the bottom of the viewport for the taskbar.
///
/// Tiling, dragging and maximizing all treat this strip as off limits.
pub const BOTTOM_RESERVE: i32 = 40;

/// Horizontal and vertical inset applied to a lone window on each side.
pub const SINGLE_WINDOW_INSET: i32 = 50;

/// Share of the usable width given to the master window in the three-window
/// layout, in percent.
pub const MASTER_PERCENT: i32 = 60;

/// Smallest width a window may ever be assigned.
pub const MIN_WINDOW_WIDTH: i32 = 320;

/// Smallest height a window may ever be assigned.
pub const MIN_WINDOW_HEIGHT: i32 = 200;

/// Viewport floor applied before tiling. Smaller viewports are treated as this
/// size so the layout degrades instead of producing negative extents.
pub const MIN_VIEWPORT_WIDTH: i32 = 800;

/// See [`MIN_VIEWPORT_WIDTH`].
pub const MIN_VIEWPORT_HEIGHT: i32 = 600;

/// Workspace every window is placed on. Reserved for future multi-workspace
/// support.
pub const DEFAULT_WORKSPACE: u32 = 1;
