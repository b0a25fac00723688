// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! - [`GalleryItem`], [`ItemId`], [`SourceRef`]: uploaded images
//! - [`ItemCollectionStore`]: the ordered item sequence

mod collection;
mod item;

pub use collection::ItemCollectionStore;
pub use item::{GalleryItem, ItemId, SourceRef};
