// SPDX-License-Identifier: MPL-2.0
//! On-screen tab geometry.

/// Horizontal extent of a tab element, in logical pixels relative to the
/// tab group container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabRect {
    /// Offset of the left edge.
    pub left: f32,
    /// Width of the element.
    pub width: f32,
}

impl TabRect {
    /// Creates a rectangle.
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Right edge of the rectangle.
    #[must_use]
    pub fn right(self) -> f32 {
        self.left + self.width
    }

    /// Returns true if the rectangle cannot be drawn as an indicator.
    ///
    /// Elements that are not laid out yet report a zero width.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !self.left.is_finite() || !self.width.is_finite() || self.width <= 0.0
    }
}
