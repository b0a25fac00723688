// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of gallery items.
//!
//! The store is the single owner of the item sequence. Display order is the
//! insertion order; there is no reordering. Any mutation invalidates a
//! previously computed carousel viewport, so callers must re-derive it
//! (see `application::gallery::GallerySession`).

use super::item::{GalleryItem, ItemId, SourceRef};
use std::ops::Range;

/// Owns the ordered list of gallery items and applies insertions.
#[derive(Debug, Clone, Default)]
pub struct ItemCollectionStore {
    items: Vec<GalleryItem>,
    next_seq: u64,
}

impl ItemCollectionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given sources, in order.
    #[must_use]
    pub fn with_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = SourceRef>,
    {
        let mut store = Self::new();
        for source in sources {
            store.append(source);
        }
        store
    }

    /// Appends a new item and returns it. Never fails.
    pub fn append(&mut self, source: SourceRef) -> GalleryItem {
        let item = GalleryItem::new(source, self.next_seq);
        self.next_seq += 1;
        self.items.push(item.clone());
        item
    }

    /// Removes the item with the given id, keeping the order of the rest.
    pub fn remove(&mut self, id: ItemId) -> Option<GalleryItem> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(position))
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Snapshot of the items ordered by insertion sequence.
    ///
    /// The returned vector does not follow later mutations.
    #[must_use]
    pub fn items(&self) -> Vec<GalleryItem> {
        // Appends are strictly increasing and removal keeps relative order,
        // so the backing vector is already sorted.
        self.items.clone()
    }

    /// Borrows the items in `range`, clamped to the items held.
    #[must_use]
    pub fn items_in(&self, range: Range<usize>) -> &[GalleryItem] {
        let end = range.end.min(self.items.len());
        let start = range.start.min(end);
        &self.items[start..end]
    }

    /// Number of items currently held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
