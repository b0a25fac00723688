// SPDX-License-Identifier: MPL-2.0
//! Layout scheduler adapters.
//!
//! - [`QueuedLayoutScheduler`]: tickets wait in a queue until the event loop
//!   drains them after its render pass. Deterministic; used by tests and by
//!   renderers that already have a "frame committed" hook.
//! - [`TokioLayoutScheduler`]: each ticket is delivered on an mpsc channel
//!   after a real timer, and cancelling aborts the timer task.

use crate::application::port::{LayoutScheduler, MeasurementTicket};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

// =============================================================================
// QueuedLayoutScheduler
// =============================================================================

/// Single-threaded scheduler whose queue is drained explicitly.
///
/// Clones share the same queue, so the event loop can keep one handle while
/// the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct QueuedLayoutScheduler {
    queue: Rc<RefCell<Vec<(MeasurementTicket, Duration)>>>,
}

impl QueuedLayoutScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tickets waiting for delivery, oldest first.
    #[must_use]
    pub fn pending(&self) -> Vec<MeasurementTicket> {
        self.queue.borrow().iter().map(|(ticket, _)| *ticket).collect()
    }

    /// Removes and returns every waiting ticket, oldest first.
    pub fn drain(&self) -> Vec<MeasurementTicket> {
        self.queue
            .borrow_mut()
            .drain(..)
            .map(|(ticket, _)| ticket)
            .collect()
    }
}

impl LayoutScheduler for QueuedLayoutScheduler {
    fn schedule(&mut self, ticket: MeasurementTicket, delay: Duration) {
        self.queue.borrow_mut().push((ticket, delay));
    }

    fn cancel(&mut self, ticket: MeasurementTicket) {
        self.queue.borrow_mut().retain(|(queued, _)| *queued != ticket);
    }
}

// =============================================================================
// TokioLayoutScheduler
// =============================================================================

/// Timer-backed scheduler running on a tokio runtime.
#[derive(Debug)]
pub struct TokioLayoutScheduler {
    runtime: Handle,
    sender: mpsc::UnboundedSender<MeasurementTicket>,
    timers: HashMap<MeasurementTicket, JoinHandle<()>>,
}

impl TokioLayoutScheduler {
    /// Creates a scheduler and the receiver the event loop reads due tickets from.
    #[must_use]
    pub fn new(runtime: Handle) -> (Self, mpsc::UnboundedReceiver<MeasurementTicket>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            runtime,
            sender,
            timers: HashMap::new(),
        };
        (scheduler, receiver)
    }

    /// Number of timers that have not fired or been cancelled yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.timers.values().filter(|timer| !timer.is_finished()).count()
    }
}

impl LayoutScheduler for TokioLayoutScheduler {
    fn schedule(&mut self, ticket: MeasurementTicket, delay: Duration) {
        self.timers.retain(|_, timer| !timer.is_finished());
        let sender = self.sender.clone();
        let timer = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone only once the event loop has shut down.
            let _ = sender.send(ticket);
        });
        self.timers.insert(ticket, timer);
    }

    fn cancel(&mut self, ticket: MeasurementTicket) {
        if let Some(timer) = self.timers.remove(&ticket) {
            timer.abort();
        }
    }
}

impl Drop for TokioLayoutScheduler {
    fn drop(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.abort();
        }
    }
}
