// SPDX-License-Identifier: MPL-2.0
//! `panel_kit` is the interaction-state core behind a tabbed profile panel
//! and an image carousel.
//!
//! It renders nothing. A rendering layer feeds it user intents (click, hover,
//! prev/next, file chosen) and measured tab rectangles, and draws the
//! snapshots it returns:
//!
//! - [`application::TabIndicatorController`] decides where the sliding tab
//!   indicator sits, reconciling hover previews, committed selection and
//!   asynchronously measured geometry.
//! - [`application::GallerySession`] owns the gallery items and the carousel
//!   viewport over them, auto-scrolling to each new upload.

#![doc(html_root_url = "https://docs.rs/panel_kit/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_utils;
