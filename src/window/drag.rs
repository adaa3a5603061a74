use super::{WindowId, WindowRecord};
use crate::constants::BOTTOM_RESERVE;
use crate::geometry::Viewport;

/// Pointer offset captured when a title bar is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub id: WindowId,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Single-slot drag state shared by the whole desktop.
///
/// At most one drag is in flight. Starting another one before ending the first
/// replaces the slot.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    slot: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag, returning whatever session was overwritten.
    pub fn start(&mut self, id: WindowId, offset_x: i32, offset_y: i32) -> Option<DragSession> {
        self.slot.replace(DragSession {
            id,
            offset_x,
            offset_y,
        })
    }

    pub fn session(&self) -> Option<DragSession> {
        self.slot
    }

    pub fn is_dragging(&self) -> bool {
        self.slot.is_some()
    }

    pub fn end(&mut self) -> Option<DragSession> {
        self.slot.take()
    }

    /// Clamped top-left for `record` with the pointer at `(pointer_x,
    /// pointer_y)`. `None` when no drag targets the record or it is maximized.
    pub fn target_position(
        &self,
        record: &WindowRecord,
        pointer_x: i32,
        pointer_y: i32,
        viewport: Viewport,
    ) -> Option<(i32, i32)> {
        let session = self.slot.filter(|s| s.id == record.id)?;
        if record.maximized {
            return None;
        }
        Some(clamp_drag_position(
            pointer_x.saturating_sub(session.offset_x),
            pointer_y.saturating_sub(session.offset_y),
            record.geometry.width,
            record.geometry.height,
            viewport,
        ))
    }
}

/// Keep a `width`×`height` window with candidate origin `(x, y)` inside the
/// viewport, above the taskbar strip.
///
/// A window larger than the space available is pinned to the origin on that
/// axis. Arithmetic saturates, so any `i32` pointer is accepted.
pub fn clamp_drag_position(x: i32, y: i32, width: i32, height: i32, viewport: Viewport) -> (i32, i32) {
    let max_x = viewport.width.saturating_sub(width).max(0);
    let max_y = viewport
        .height
        .saturating_sub(height)
        .saturating_sub(BOTTOM_RESERVE)
        .max(0);
    (x.clamp(0, max_x), y.clamp(0, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;

    const VIEW: Viewport = Viewport::new(1200, 800);

    fn window(id: u64) -> WindowRecord {
        let mut record = WindowRecord::new(WindowId::new(id), "app", "App", "");
        record.geometry = Geometry::new(100, 100, 400, 300);
        record
    }

    #[test]
    fn start_overwrites_previous_session() {
        let mut drag = DragController::new();
        assert!(drag.start(WindowId::new(1), 5, 5).is_none());
        let replaced = drag.start(WindowId::new(2), 7, 8);
        assert_eq!(replaced.map(|s| s.id), Some(WindowId::new(1)));
        assert_eq!(drag.session().map(|s| s.id), Some(WindowId::new(2)));
    }

    #[test]
    fn end_without_start_is_noop() {
        let mut drag = DragController::new();
        assert!(drag.end().is_none());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn target_applies_offset() {
        let mut drag = DragController::new();
        let record = window(1);
        drag.start(record.id, 10, 4);
        assert_eq!(drag.target_position(&record, 310, 204, VIEW), Some((300, 200)));
    }

    #[test]
    fn target_clamps_to_viewport() {
        let mut drag = DragController::new();
        let record = window(1);
        drag.start(record.id, 0, 0);
        assert_eq!(drag.target_position(&record, -50, -50, VIEW), Some((0, 0)));
        assert_eq!(
            drag.target_position(&record, 5000, 5000, VIEW),
            Some((1200 - 400, 800 - 300 - 40))
        );
    }

    #[test]
    fn maximized_or_other_window_is_ignored() {
        let mut drag = DragController::new();
        let mut record = window(1);
        drag.start(record.id, 0, 0);
        assert!(drag.target_position(&window(2), 10, 10, VIEW).is_none());
        record.maximized = true;
        assert!(drag.target_position(&record, 10, 10, VIEW).is_none());
    }

    #[test]
    fn extreme_pointer_saturates_to_the_nearest_edge() {
        let mut drag = DragController::new();
        let record = window(1);
        drag.start(record.id, 10, 10);
        assert_eq!(
            drag.target_position(&record, i32::MIN, i32::MIN, VIEW),
            Some((0, 0))
        );
        drag.start(record.id, -10, -10);
        assert_eq!(
            drag.target_position(&record, i32::MAX, i32::MAX, VIEW),
            Some((1200 - 400, 800 - 300 - 40))
        );
    }

    #[test]
    fn oversize_window_pins_to_origin() {
        assert_eq!(
            clamp_drag_position(30, 30, 2000, 2000, VIEW),
            (0, 0)
        );
    }
}
