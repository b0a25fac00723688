// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery items ([`GalleryItem`](gallery::GalleryItem),
//!   [`ItemCollectionStore`](gallery::ItemCollectionStore))
//! - [`profile`]: Profile tabs ([`TabId`](profile::TabId),
//!   [`TabSet`](profile::TabSet), [`TabRect`](profile::TabRect))
//! - [`ui`]: UI value objects ([`VisibleCount`](ui::VisibleCount),
//!   [`SettleDelay`](ui::SettleDelay))

pub mod gallery;
pub mod profile;
pub mod ui;
