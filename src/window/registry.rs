use std::collections::BTreeMap;

use super::{WindowId, WindowRecord};
use crate::geometry::Viewport;
use crate::layout::tile_windows;

/// Authoritative store of open windows.
///
/// Records are keyed by [`WindowId`]. Because ids only ever grow, iteration
/// order is open order, which is also the rank order the tiler uses.
#[derive(Debug, Clone, Default)]
pub struct WindowRegistry {
    windows: BTreeMap<WindowId, WindowRecord>,
    next_id: u64,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn allocate_id(&mut self) -> WindowId {
        self.next_id = self.next_id.saturating_add(1);
        WindowId::new(self.next_id)
    }

    pub(crate) fn insert(&mut self, record: WindowRecord) {
        tracing::debug!(window_id = %record.id, app = %record.app, "registered window");
        self.windows.insert(record.id, record);
    }

    pub(crate) fn remove(&mut self, id: WindowId) -> Option<WindowRecord> {
        self.windows.remove(&id)
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.get_mut(&id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Ids in open order.
    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    /// Records in open order.
    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.values()
    }

    pub(crate) fn clear(&mut self) {
        self.windows.clear();
    }

    /// Recompute the tiled geometry of every window, maximized or not, from
    /// the current open order.
    pub(crate) fn retile(&mut self, viewport: Viewport) {
        let ids = self.ids();
        for (id, geometry) in tile_windows(&ids, viewport) {
            if let Some(record) = self.windows.get_mut(&id) {
                record.geometry = geometry;
            }
        }
        tracing::debug!(count = ids.len(), "retiled windows");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;

    fn record(registry: &mut WindowRegistry, app: &str) -> WindowId {
        let id = registry.allocate_id();
        registry.insert(WindowRecord::new(id, app, app, ""));
        id
    }

    #[test]
    fn ids_are_never_reused() {
        let mut registry = WindowRegistry::new();
        let a = record(&mut registry, "a");
        registry.remove(a);
        let b = record(&mut registry, "b");
        assert!(b > a);
        assert!(!registry.contains(a));
    }

    #[test]
    fn iteration_follows_open_order() {
        let mut registry = WindowRegistry::new();
        let a = record(&mut registry, "a");
        let b = record(&mut registry, "b");
        let c = record(&mut registry, "c");
        registry.remove(b);
        assert_eq!(registry.ids(), vec![a, c]);
        let apps: Vec<&str> = registry.iter().map(|r| r.app.as_str()).collect();
        assert_eq!(apps, vec!["a", "c"]);
    }

    #[test]
    fn retile_writes_every_geometry() {
        let mut registry = WindowRegistry::new();
        let a = record(&mut registry, "a");
        let b = record(&mut registry, "b");
        registry.retile(Viewport::new(1200, 800));
        assert_eq!(
            registry.get(a).map(|r| r.geometry),
            Some(Geometry::new(20, 50, 570, 660))
        );
        assert_eq!(
            registry.get(b).map(|r| r.geometry),
            Some(Geometry::new(610, 50, 570, 660))
        );
    }
}
