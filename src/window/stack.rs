use super::{WindowId, WindowRecord};

/// Hands out stacking priorities and remembers the active window.
///
/// The counter only grows, even across closes, so no two windows ever share a
/// z-index. The active id is tracked on its own and is not recomputed from the
/// z-index maximum; minimizing the active window leaves it in place.
#[derive(Debug, Clone, Default)]
pub struct StackController {
    counter: u64,
    active: Option<WindowId>,
}

impl StackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest z-index handed out so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    fn bump(&mut self) -> u64 {
        self.counter = self.counter.saturating_add(1);
        self.counter
    }

    /// Restore, raise to the top and activate `record`.
    pub fn raise(&mut self, record: &mut WindowRecord) {
        record.minimized = false;
        record.z_index = self.bump();
        self.active = Some(record.id);
    }

    /// Forget the active window if it is `id`. Nothing else becomes active.
    pub fn release(&mut self, id: WindowId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }

    pub(crate) fn clear_active(&mut self) {
        self.active = None;
    }
}
