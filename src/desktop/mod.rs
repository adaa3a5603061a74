//! The desktop facade.
//!
//! [`Desktop`] is a caller-owned state container that ties the registry,
//! tiler, stacking and drag controllers together. Every operation runs to
//! completion synchronously; references to windows that no longer exist are
//! silent no-ops reported through the `bool` return value.

mod command;

pub use command::{CommandOutcome, DesktopCommand, replay};

use crate::geometry::{Geometry, Viewport};
use crate::window::{
    DragController, DragSession, FocusRing, StackController, WindowId, WindowRecord,
    WindowRegistry,
};

/// Lifecycle notification queued for the shell, which forwards them to
/// collaborators such as sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopEvent {
    Opened(WindowId),
    Closed(WindowId),
    Minimized(WindowId),
    Restored(WindowId),
    Maximized(WindowId),
    Unmaximized(WindowId),
    Focused(WindowId),
}

#[derive(Debug, Clone)]
pub struct Desktop {
    registry: WindowRegistry,
    stack: StackController,
    drag: DragController,
    viewport: Viewport,
    // queue of lifecycle events; shell drains via `take_events`
    events: Vec<DesktopEvent>,
}

impl Desktop {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            registry: WindowRegistry::new(),
            stack: StackController::new(),
            drag: DragController::new(),
            viewport,
            events: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record a new screen size. Existing geometry is left as is; only the
    /// next create or close re-tiles.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Open a window, re-tile everything and make the new window active and
    /// topmost.
    pub fn create_window(
        &mut self,
        app: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
    ) -> WindowId {
        let id = self.registry.allocate_id();
        let mut record = WindowRecord::new(id, app, title, icon);
        self.stack.raise(&mut record);
        self.registry.insert(record);
        self.registry.retile(self.viewport);
        tracing::debug!(window_id = %id, "opened window");
        self.events.push(DesktopEvent::Opened(id));
        id
    }

    /// Close a window and re-tile the rest. If it was active, nothing is
    /// activated in its place.
    pub fn close_window(&mut self, id: WindowId) -> bool {
        if self.registry.remove(id).is_none() {
            tracing::debug!(window_id = %id, "close ignored for unknown window");
            return false;
        }
        self.stack.release(id);
        if self.drag.session().is_some_and(|s| s.id == id) {
            self.drag.end();
        }
        if !self.registry.is_empty() {
            self.registry.retile(self.viewport);
        }
        tracing::debug!(window_id = %id, "closed window");
        self.events.push(DesktopEvent::Closed(id));
        true
    }

    /// Toggle the minimized flag. Geometry, stacking and the active id are
    /// untouched.
    pub fn minimize_window(&mut self, id: WindowId) -> bool {
        let Some(record) = self.registry.get_mut(id) else {
            tracing::debug!(window_id = %id, "minimize ignored for unknown window");
            return false;
        };
        record.minimized = !record.minimized;
        self.events.push(if record.minimized {
            DesktopEvent::Minimized(id)
        } else {
            DesktopEvent::Restored(id)
        });
        true
    }

    /// Toggle the maximized flag. The tiler is not consulted; see
    /// [`Desktop::display_geometry`] for where a maximized window is drawn.
    pub fn maximize_window(&mut self, id: WindowId) -> bool {
        let Some(record) = self.registry.get_mut(id) else {
            tracing::debug!(window_id = %id, "maximize ignored for unknown window");
            return false;
        };
        record.maximized = !record.maximized;
        self.events.push(if record.maximized {
            DesktopEvent::Maximized(id)
        } else {
            DesktopEvent::Unmaximized(id)
        });
        true
    }

    /// Restore, raise and activate a window.
    pub fn focus_window(&mut self, id: WindowId) -> bool {
        let Some(record) = self.registry.get_mut(id) else {
            tracing::debug!(window_id = %id, "focus ignored for unknown window");
            return false;
        };
        self.stack.raise(record);
        self.events.push(DesktopEvent::Focused(id));
        true
    }

    /// Focus the next (or previous) window in open order relative to the
    /// active one.
    pub fn focus_next(&mut self, forward: bool) -> Option<WindowId> {
        let mut ring = FocusRing::new(self.registry.ids(), self.stack.active());
        let next = ring.advance(forward)?;
        self.focus_window(next);
        Some(next)
    }

    /// Capture the pointer offset within `id`'s title bar. Replaces any drag
    /// already in flight.
    pub fn start_drag(&mut self, id: WindowId, offset_x: i32, offset_y: i32) -> bool {
        if !self.registry.contains(id) {
            tracing::debug!(window_id = %id, "drag ignored for unknown window");
            return false;
        }
        if let Some(previous) = self.drag.start(id, offset_x, offset_y) {
            tracing::debug!(window_id = %previous.id, "drag slot overwritten");
        }
        true
    }

    /// Move `id` so the captured offset sits under the absolute pointer
    /// position, clamped to the viewport. Requires a drag on `id`; maximized
    /// windows do not move.
    pub fn move_window(&mut self, id: WindowId, pointer_x: i32, pointer_y: i32) -> bool {
        let viewport = self.viewport;
        let Some(record) = self.registry.get_mut(id) else {
            return false;
        };
        let Some((x, y)) = self
            .drag
            .target_position(record, pointer_x, pointer_y, viewport)
        else {
            return false;
        };
        record.geometry.x = x;
        record.geometry.y = y;
        true
    }

    /// Move whichever window the drag slot holds. No-op without a drag.
    pub fn drag(&mut self, pointer_x: i32, pointer_y: i32) -> bool {
        match self.drag.session() {
            Some(session) => self.move_window(session.id, pointer_x, pointer_y),
            None => false,
        }
    }

    /// Release the drag slot. Returns whether a drag was in flight.
    pub fn end_drag(&mut self) -> bool {
        self.drag.end().is_some()
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag.session()
    }

    /// Close every window at once without intermediate re-tiles.
    pub fn close_all(&mut self) {
        let ids = self.registry.ids();
        self.registry.clear();
        self.stack.clear_active();
        self.drag.end();
        for id in ids {
            self.events.push(DesktopEvent::Closed(id));
        }
    }

    /// Windows in open order.
    pub fn windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.registry.iter()
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.registry.get(id)
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        self.registry.ids()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn active(&self) -> Option<WindowId> {
        self.stack.active()
    }

    /// The visible window with the highest z-index. May differ from
    /// [`Desktop::active`].
    pub fn topmost(&self) -> Option<WindowId> {
        self.registry
            .iter()
            .filter(|r| r.is_visible())
            .max_by_key(|r| r.z_index)
            .map(|r| r.id)
    }

    /// Visible windows from bottom to top.
    pub fn stacking_order(&self) -> Vec<WindowId> {
        let mut visible: Vec<&WindowRecord> =
            self.registry.iter().filter(|r| r.is_visible()).collect();
        visible.sort_by_key(|r| r.z_index);
        visible.into_iter().map(|r| r.id).collect()
    }

    /// Where a window is drawn: the viewport for maximized windows, the
    /// stored geometry otherwise.
    pub fn display_geometry(&self, id: WindowId) -> Option<Geometry> {
        self.registry.get(id).map(|record| {
            if record.maximized {
                self.viewport.maximized_geometry()
            } else {
                record.geometry
            }
        })
    }

    /// Topmost visible window under the point.
    pub fn window_at(&self, x: i32, y: i32) -> Option<WindowId> {
        self.stacking_order().into_iter().rev().find(|id| {
            self.display_geometry(*id)
                .is_some_and(|geometry| geometry.contains(x, y))
        })
    }

    pub fn take_events(&mut self) -> Vec<DesktopEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> Desktop {
        Desktop::new(Viewport::new(1200, 800))
    }

    #[test]
    fn create_activates_and_raises() {
        let mut d = desktop();
        let a = d.create_window("about", "About", "i");
        let b = d.create_window("notes", "Notes", "n");
        assert_eq!(d.active(), Some(b));
        assert_eq!(d.topmost(), Some(b));
        assert_eq!(d.stacking_order(), vec![a, b]);
    }

    #[test]
    fn close_active_leaves_no_active() {
        let mut d = desktop();
        let a = d.create_window("about", "About", "");
        let b = d.create_window("notes", "Notes", "");
        assert!(d.close_window(b));
        assert_eq!(d.active(), None);
        assert_eq!(d.topmost(), Some(a));
        assert!(!d.close_window(b));
    }

    #[test]
    fn close_inactive_keeps_active() {
        let mut d = desktop();
        let a = d.create_window("about", "About", "");
        let b = d.create_window("notes", "Notes", "");
        d.close_window(a);
        assert_eq!(d.active(), Some(b));
    }

    #[test]
    fn minimize_toggles_without_touching_geometry() {
        let mut d = desktop();
        let a = d.create_window("about", "About", "");
        let before = d.window(a).map(|r| r.geometry);
        assert!(d.minimize_window(a));
        assert!(d.window(a).is_some_and(|r| r.minimized));
        assert_eq!(d.topmost(), None);
        assert!(d.minimize_window(a));
        assert!(d.window(a).is_some_and(|r| !r.minimized));
        assert_eq!(d.window(a).map(|r| r.geometry), before);
    }

    #[test]
    fn maximize_is_display_only() {
        let mut d = desktop();
        let a = d.create_window("about", "About", "");
        let stored = d.window(a).map(|r| r.geometry);
        d.maximize_window(a);
        assert_eq!(d.window(a).map(|r| r.geometry), stored);
        assert_eq!(
            d.display_geometry(a),
            Some(Geometry::new(0, 0, 1200, 760))
        );
        d.maximize_window(a);
        assert_eq!(d.display_geometry(a), stored);
    }

    #[test]
    fn focus_restores_and_bumps() {
        let mut d = desktop();
        let a = d.create_window("about", "About", "");
        let _b = d.create_window("notes", "Notes", "");
        d.minimize_window(a);
        let z_before = d.window(a).map(|r| r.z_index).unwrap_or_default();
        assert!(d.focus_window(a));
        let record = d.window(a).cloned().expect("window present");
        assert!(!record.minimized);
        assert!(record.z_index > z_before);
        assert_eq!(d.active(), Some(a));
    }

    #[test]
    fn stale_ids_are_noops() {
        let mut d = desktop();
        let ghost = WindowId::new(42);
        assert!(!d.minimize_window(ghost));
        assert!(!d.maximize_window(ghost));
        assert!(!d.focus_window(ghost));
        assert!(!d.start_drag(ghost, 0, 0));
        assert!(!d.move_window(ghost, 1, 1));
        assert!(d.take_events().is_empty());
    }

    #[test]
    fn drag_moves_and_clamps() {
        let mut d = desktop();
        let a = d.create_window("about", "About", "");
        assert!(d.start_drag(a, 10, 5));
        assert!(d.drag(110, 105));
        let g = d.window(a).map(|r| r.geometry).expect("window present");
        assert_eq!((g.x, g.y), (100, 100));
        assert!(d.drag(-400, -400));
        let g = d.window(a).map(|r| r.geometry).expect("window present");
        assert_eq!((g.x, g.y), (0, 0));
        assert!(d.end_drag());
        assert!(!d.drag(50, 50));
        assert!(!d.end_drag());
    }

    #[test]
    fn drag_skips_maximized() {
        let mut d = desktop();
        let a = d.create_window("about", "About", "");
        let before = d.window(a).map(|r| r.geometry);
        d.maximize_window(a);
        d.start_drag(a, 0, 0);
        assert!(!d.drag(300, 300));
        assert_eq!(d.window(a).map(|r| r.geometry), before);
    }

    #[test]
    fn closing_dragged_window_releases_slot() {
        let mut d = desktop();
        let a = d.create_window("about", "About", "");
        d.start_drag(a, 0, 0);
        d.close_window(a);
        assert!(d.drag_session().is_none());
    }

    #[test]
    fn window_at_prefers_topmost() {
        let mut d = desktop();
        let a = d.create_window("about", "About", "");
        d.maximize_window(a);
        let b = d.create_window("notes", "Notes", "");
        let g = d.display_geometry(b).expect("window present");
        assert_eq!(d.window_at(g.x + 1, g.y + 1), Some(b));
        d.focus_window(a);
        assert_eq!(d.window_at(g.x + 1, g.y + 1), Some(a));
    }

    #[test]
    fn focus_next_cycles_open_order() {
        let mut d = desktop();
        let a = d.create_window("a", "A", "");
        let b = d.create_window("b", "B", "");
        assert_eq!(d.focus_next(true), Some(a));
        assert_eq!(d.focus_next(true), Some(b));
        assert_eq!(d.focus_next(false), Some(a));
    }

    #[test]
    fn events_are_queued_and_drained() {
        let mut d = desktop();
        let a = d.create_window("a", "A", "");
        d.minimize_window(a);
        d.focus_window(a);
        d.close_window(a);
        assert_eq!(
            d.take_events(),
            vec![
                DesktopEvent::Opened(a),
                DesktopEvent::Minimized(a),
                DesktopEvent::Focused(a),
                DesktopEvent::Closed(a),
            ]
        );
        assert!(d.take_events().is_empty());
    }

    #[test]
    fn close_all_clears_everything() {
        let mut d = desktop();
        d.create_window("a", "A", "");
        d.create_window("b", "B", "");
        d.close_all();
        assert!(d.is_empty());
        assert_eq!(d.active(), None);
    }
}
