// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Carousel**: How many gallery items are visible at once
//! - **Indicator**: Deferred geometry measurement delay
//! - **Tabs**: The profile panel's known tabs

use crate::domain::profile::tab::{ABOUT, EXPERIENCES, RECOMMENDED};
use crate::domain::ui::newtypes::{settle_bounds, visible_bounds};

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default number of gallery items shown side by side.
pub const DEFAULT_VISIBLE_COUNT: usize = visible_bounds::DEFAULT;

/// Minimum number of visible gallery items.
pub const MIN_VISIBLE_COUNT: usize = visible_bounds::MIN;

/// Maximum number of visible gallery items.
pub const MAX_VISIBLE_COUNT: usize = visible_bounds::MAX;

// ==========================================================================
// Indicator Defaults
// ==========================================================================

/// Default delay before measuring tab geometry after a tab-set change (ms).
pub const DEFAULT_LAYOUT_SETTLE_DELAY_MS: u64 = settle_bounds::DEFAULT_MS;

/// Maximum accepted settle delay (ms).
pub const MAX_LAYOUT_SETTLE_DELAY_MS: u64 = settle_bounds::MAX_MS;

// ==========================================================================
// Tab Defaults
// ==========================================================================

/// Tabs shown when the configuration does not list any, in display order.
pub const DEFAULT_TABS: [&str; 3] = [ABOUT, EXPERIENCES, RECOMMENDED];

/// Tab committed on mount.
pub const DEFAULT_TAB: &str = ABOUT;
