// SPDX-License-Identifier: MPL-2.0
//! In-memory tab geometry registry.
//!
//! The rendering layer records a rectangle per tab each time layout settles
//! and passes the map to the indicator controller as its read model.

use crate::application::port::TabGeometryRegistry;
use crate::domain::profile::{TabId, TabRect};
use std::collections::HashMap;

/// Map from tab identifier to its last measured rectangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryMap {
    rects: HashMap<TabId, TabRect>,
}

impl GeometryMap {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the rectangle of `tab`.
    pub fn record(&mut self, tab: TabId, rect: TabRect) {
        self.rects.insert(tab, rect);
    }

    /// Forgets the rectangle of `tab`, e.g. when it is unmounted.
    pub fn forget(&mut self, tab: &TabId) -> Option<TabRect> {
        self.rects.remove(tab)
    }

    /// Forgets every rectangle.
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// Number of measured tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns true if nothing has been measured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl TabGeometryRegistry for GeometryMap {
    fn lookup(&self, tab: &TabId) -> Option<TabRect> {
        self.rects.get(tab).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_replaces_previous_rect() {
        let mut map = GeometryMap::new();
        let about = TabId::new("about");
        map.record(about.clone(), TabRect::new(0.0, 10.0));
        map.record(about.clone(), TabRect::new(5.0, 20.0));

        assert_eq!(map.len(), 1);
        assert_eq!(map.lookup(&about), Some(TabRect::new(5.0, 20.0)));
    }

    #[test]
    fn forget_and_clear_remove_entries() {
        let mut map = GeometryMap::new();
        let about = TabId::new("about");
        map.record(about.clone(), TabRect::new(0.0, 10.0));
        map.record(TabId::new("experiences"), TabRect::new(10.0, 10.0));

        assert!(map.forget(&about).is_some());
        assert!(map.lookup(&about).is_none());

        map.clear();
        assert!(map.is_empty());
    }
}
