// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that the rendering layer and the
//! infrastructure adapters implement. These traits use only domain types,
//! ensuring the controllers remain independent of any toolkit.
//!
//! # Available Ports
//!
//! - [`geometry`]: Measured tab rectangles (read model)
//! - [`resize`]: Container resize notifications with scoped subscriptions
//! - [`scheduler`]: Cancellable deferred layout measurement
//!
//! # Design Notes
//!
//! - No `async fn`: controllers are synchronous and run to completion
//! - Nothing here is `Send`; the core lives on the UI event loop

pub mod geometry;
pub mod resize;
pub mod scheduler;

// Re-export main types for convenience
pub use geometry::TabGeometryRegistry;
pub use resize::{ResizeEventSource, ResizeSubscription};
pub use scheduler::{LayoutScheduler, MeasurementTicket};
