// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Visible Count Bounds
// =============================================================================

/// Number of carousel items shown at once (1 to 12).
pub mod visible_bounds {
    /// Minimum number of visible items.
    pub const MIN: usize = 1;
    /// Maximum number of visible items.
    pub const MAX: usize = 12;
    /// Default number of visible items.
    pub const DEFAULT: usize = 3;
}

// =============================================================================
// VisibleCount
// =============================================================================

/// How many carousel items fit in the viewport at once.
///
/// This newtype guarantees the count is never zero, so boundary
/// arithmetic never has to special-case an empty viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleCount(usize);

impl VisibleCount {
    /// Creates a new visible count, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(visible_bounds::MIN, visible_bounds::MAX))
    }

    /// Returns the raw count.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for VisibleCount {
    fn default() -> Self {
        Self(visible_bounds::DEFAULT)
    }
}

// =============================================================================
// Settle Delay Bounds
// =============================================================================

/// Delay before measuring tab geometry after a tab-set change (0 to 1000 ms).
pub mod settle_bounds {
    /// Minimum delay in milliseconds.
    pub const MIN_MS: u64 = 0;
    /// Maximum delay in milliseconds.
    pub const MAX_MS: u64 = 1000;
    /// Default delay in milliseconds.
    pub const DEFAULT_MS: u64 = 50;
}

// =============================================================================
// SettleDelay
// =============================================================================

/// Delay between a tab-set change and the deferred geometry measurement.
///
/// The renderer may not have committed final geometry synchronously, so the
/// measurement is scheduled after this delay rather than run immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettleDelay(u64);

impl SettleDelay {
    /// Creates a new delay from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(settle_bounds::MIN_MS, settle_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SettleDelay {
    fn default() -> Self {
        Self(settle_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
