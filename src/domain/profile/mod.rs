// SPDX-License-Identifier: MPL-2.0
//! Profile panel domain types.
//!
//! - [`TabId`], [`TabSet`]: known tab identifiers
//! - [`TabRect`]: measured tab geometry

mod geometry;
pub mod tab;

pub use geometry::TabRect;
pub use tab::{TabId, TabSet};
