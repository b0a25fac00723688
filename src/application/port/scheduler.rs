// SPDX-License-Identifier: MPL-2.0
//! Deferred layout measurement port.
//!
//! Geometry is a function of a layout the core does not perform, so after a
//! tab-set change the measurement has to run once the rendering pass has
//! committed. A [`LayoutScheduler`] delivers a [`MeasurementTicket`] back to
//! the event loop after a delay; the loop then hands the ticket to
//! `TabIndicatorController::on_measurement_due`.
//!
//! Cancellation is last-scheduled-wins: scheduling a new measurement cancels
//! the previous one, and a cancelled ticket must never be applied.

use std::fmt;
use std::time::Duration;

/// Handle identifying one scheduled measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeasurementTicket(u64);

impl MeasurementTicket {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ticket number.
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MeasurementTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "measurement#{}", self.0)
    }
}

/// Cancellable, delayed delivery of measurement tickets.
pub trait LayoutScheduler {
    /// Arranges for `ticket` to come back to the event loop after `delay`.
    fn schedule(&mut self, ticket: MeasurementTicket, delay: Duration);

    /// Cancels a scheduled ticket. Unknown or already delivered tickets are
    /// ignored.
    fn cancel(&mut self, ticket: MeasurementTicket);
}
