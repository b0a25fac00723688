// SPDX-License-Identifier: MPL-2.0
//! Viewport resize notification port.
//!
//! A resize source is an external event stream. Consumers subscribe for
//! their lifetime; dropping the returned [`ResizeSubscription`] is the
//! unsubscribe, so release is guaranteed on every exit path.

/// Source of container resize signals.
pub trait ResizeEventSource {
    /// Subscribes to resize signals.
    fn subscribe(&self) -> Box<dyn ResizeSubscription>;
}

/// Live subscription to a [`ResizeEventSource`].
///
/// Dropping the subscription unsubscribes.
pub trait ResizeSubscription {
    /// Drains pending signals and returns true if at least one resize
    /// happened since the previous call.
    fn take_resized(&mut self) -> bool;
}
