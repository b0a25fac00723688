// SPDX-License-Identifier: MPL-2.0
//! Carousel viewport controller.
//!
//! Translates navigation intents and collection-size changes into a valid
//! [`CarouselViewport`]. The controller is the explicit command interface to
//! the carousel engine: the renderer never mutates the viewport directly.

use crate::domain::ui::VisibleCount;
use std::ops::Range;
use tracing::debug;

/// Start/end navigability of the viewport.
///
/// A control bound to one of these flags must be disabled exactly when
/// motion in that direction would be a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryState {
    /// The viewport shows the first item.
    pub is_at_start: bool,
    /// The viewport shows the last item.
    pub is_at_end: bool,
}

/// Snapshot of the carousel viewport, re-emitted after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarouselViewport {
    /// Total number of items in the collection.
    pub item_count: usize,
    /// Number of items that fit in the viewport.
    pub visible_count: usize,
    /// Index of the first visible item.
    pub current_index: usize,
    /// See [`BoundaryState::is_at_start`].
    pub is_at_start: bool,
    /// See [`BoundaryState::is_at_end`].
    pub is_at_end: bool,
}

impl CarouselViewport {
    /// Boundary flags of this snapshot.
    #[must_use]
    pub fn boundaries(&self) -> BoundaryState {
        BoundaryState {
            is_at_start: self.is_at_start,
            is_at_end: self.is_at_end,
        }
    }

    /// Half-open range of item indices the renderer should draw.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.current_index + self.visible_count).min(self.item_count);
        self.current_index.min(end)..end
    }
}

/// Owns the carousel viewport state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselController {
    item_count: usize,
    visible_count: VisibleCount,
    current_index: usize,
}

impl CarouselController {
    /// Creates a controller positioned on the first item.
    #[must_use]
    pub fn new(item_count: usize, visible_count: VisibleCount) -> Self {
        Self {
            item_count,
            visible_count,
            current_index: 0,
        }
    }

    /// Resets the controller for a new collection size and rewinds to the start.
    pub fn initialize(&mut self, item_count: usize, visible_count: VisibleCount) -> CarouselViewport {
        *self = Self::new(item_count, visible_count);
        self.viewport()
    }

    /// Highest valid `current_index`.
    fn max_start(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count.value())
    }

    /// Advances the viewport by one item. No-op at the end boundary.
    pub fn next(&mut self) -> CarouselViewport {
        if self.boundary_state().is_at_end {
            return self.viewport();
        }
        self.current_index = (self.current_index + 1).min(self.max_start());
        self.viewport()
    }

    /// Moves the viewport back by one item. No-op at the start boundary.
    pub fn previous(&mut self) -> CarouselViewport {
        if self.boundary_state().is_at_start {
            return self.viewport();
        }
        self.current_index = self.current_index.saturating_sub(1);
        self.viewport()
    }

    /// Applies a new collection size after an insertion and scrolls so the
    /// newest item is the last visible one.
    ///
    /// `new_total` must be the post-insertion count.
    pub fn on_item_inserted(&mut self, new_total: usize) -> CarouselViewport {
        self.item_count = new_total;
        self.current_index = self.max_start();
        debug!(
            item_count = self.item_count,
            current_index = self.current_index,
            "carousel re-centered on inserted item"
        );
        self.viewport()
    }

    /// Applies a new collection size after a removal, keeping the position
    /// where possible.
    pub fn on_item_removed(&mut self, new_total: usize) -> CarouselViewport {
        self.item_count = new_total;
        self.current_index = self.current_index.min(self.max_start());
        self.viewport()
    }

    /// Changes how many items fit in the viewport (responsive breakpoint).
    pub fn set_visible_count(&mut self, visible_count: VisibleCount) -> CarouselViewport {
        self.visible_count = visible_count;
        self.current_index = self.current_index.min(self.max_start());
        self.viewport()
    }

    /// Current boundary flags.
    #[must_use]
    pub fn boundary_state(&self) -> BoundaryState {
        self.viewport().boundaries()
    }

    /// Current viewport snapshot.
    #[must_use]
    pub fn viewport(&self) -> CarouselViewport {
        CarouselViewport {
            item_count: self.item_count,
            visible_count: self.visible_count.value(),
            current_index: self.current_index,
            is_at_start: self.current_index == 0,
            // When everything fits, max_start is 0 and both flags hold.
            is_at_end: self.current_index >= self.max_start(),
        }
    }
}
