// SPDX-License-Identifier: MPL-2.0
//! Tab geometry port definition.
//!
//! The rendering layer measures tab elements whenever layout settles (mount,
//! tab change, container resize) and exposes the result through
//! [`TabGeometryRegistry`]. The indicator controller only reads it; it never
//! reaches into the render tree.

use crate::domain::profile::{TabId, TabRect};

/// Read model mapping a tab identifier to its on-screen rectangle.
pub trait TabGeometryRegistry {
    /// Returns the last measured rectangle for `tab`, or `None` if the tab
    /// has not been measured yet.
    fn lookup(&self, tab: &TabId) -> Option<TabRect>;
}
