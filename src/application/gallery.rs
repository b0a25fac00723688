// SPDX-License-Identifier: MPL-2.0
//! Gallery session: the item store paired with its carousel.
//!
//! Every store mutation invalidates the viewport, so the session performs
//! the mutation and the viewport update in one call. No caller can observe
//! an item count that disagrees with the carousel boundaries.

use super::carousel::{CarouselController, CarouselViewport};
use crate::domain::gallery::{GalleryItem, ItemCollectionStore, ItemId, SourceRef};
use crate::domain::ui::VisibleCount;
use tracing::debug;

/// Gallery widget state: items plus the viewport over them.
#[derive(Debug, Clone)]
pub struct GallerySession {
    store: ItemCollectionStore,
    carousel: CarouselController,
}

impl GallerySession {
    /// Wraps an existing store; the carousel starts on the first item.
    #[must_use]
    pub fn new(store: ItemCollectionStore, visible_count: VisibleCount) -> Self {
        let carousel = CarouselController::new(store.count(), visible_count);
        Self { store, carousel }
    }

    /// Handles a "file chosen" event from the picker.
    ///
    /// Appends the item and scrolls so it becomes the last visible one.
    pub fn on_file_chosen(&mut self, source: SourceRef) -> (GalleryItem, CarouselViewport) {
        let item = self.store.append(source);
        // Re-center on the post-insertion count, never a count captured earlier.
        let viewport = self.carousel.on_item_inserted(self.store.count());
        debug!(id = %item.id(), source = %item.source(), "gallery item added");
        (item, viewport)
    }

    /// Removes an item. Returns `None` if the id is unknown.
    pub fn remove_item(&mut self, id: ItemId) -> Option<(GalleryItem, CarouselViewport)> {
        let item = self.store.remove(id)?;
        let viewport = self.carousel.on_item_removed(self.store.count());
        debug!(id = %item.id(), "gallery item removed");
        Some((item, viewport))
    }

    /// Advances the carousel.
    pub fn next(&mut self) -> CarouselViewport {
        self.carousel.next()
    }

    /// Moves the carousel back.
    pub fn previous(&mut self) -> CarouselViewport {
        self.carousel.previous()
    }

    /// Changes how many items fit in the viewport.
    pub fn set_visible_count(&mut self, visible_count: VisibleCount) -> CarouselViewport {
        self.carousel.set_visible_count(visible_count)
    }

    /// Current viewport snapshot.
    #[must_use]
    pub fn viewport(&self) -> CarouselViewport {
        self.carousel.viewport()
    }

    /// Item snapshot in display order.
    #[must_use]
    pub fn items(&self) -> Vec<GalleryItem> {
        self.store.items()
    }

    /// Items inside the current viewport.
    #[must_use]
    pub fn visible_items(&self) -> &[GalleryItem] {
        self.store.items_in(self.viewport().visible_range())
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&GalleryItem> {
        self.store.get(id)
    }

    /// Number of items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.count()
    }
}
