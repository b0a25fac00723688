// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`geometry`]: In-memory geometry map (implements [`TabGeometryRegistry`])
//! - [`resize`]: tokio broadcast resize source (implements [`ResizeEventSource`])
//! - [`scheduler`]: Queued and tokio timer schedulers (implement [`LayoutScheduler`])
//!
//! [`TabGeometryRegistry`]: crate::application::port::TabGeometryRegistry
//! [`ResizeEventSource`]: crate::application::port::ResizeEventSource
//! [`LayoutScheduler`]: crate::application::port::LayoutScheduler

pub mod geometry;
pub mod resize;
pub mod scheduler;

// Re-export main types for convenience
pub use geometry::GeometryMap;
pub use resize::{BroadcastResizeSource, BroadcastResizeSubscription};
pub use scheduler::{QueuedLayoutScheduler, TokioLayoutScheduler};
