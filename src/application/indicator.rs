// SPDX-License-Identifier: MPL-2.0
//! Sliding tab indicator controller.
//!
//! Decides which tab's geometry the indicator shows at any instant and
//! reconciles that decision against geometry that becomes available
//! asynchronously.
//!
//! # State machine
//!
//! | Phase               | preview | geometry   | visible |
//! |---------------------|---------|------------|---------|
//! | `Unresolved`        | any     | unresolved | false   |
//! | `ResolvedCommitted` | none    | committed  | true    |
//! | `ResolvedPreview`   | `T`     | of `T`     | true    |
//!
//! Preview always wins over the committed tab while present. There is no
//! interpolation state; the renderer animates between resolved rectangles.
//!
//! # Lifecycle
//!
//! [`TabIndicatorController::mount`] subscribes to the resize source and
//! schedules the first deferred measurement. [`TabIndicatorController::dispose`]
//! (or dropping the controller) cancels any pending measurement and releases
//! the subscription.

use super::port::{
    LayoutScheduler, MeasurementTicket, ResizeEventSource, ResizeSubscription,
    TabGeometryRegistry,
};
use crate::domain::profile::{TabId, TabRect, TabSet};
use crate::domain::ui::SettleDelay;
use crate::error::{Error, Result};
use std::fmt;
use tracing::{debug, trace, warn};

/// Coarse phase of the indicator state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorPhase {
    /// Geometry for the active tab is not known; the indicator is hidden.
    Unresolved,
    /// Showing the committed tab.
    ResolvedCommitted,
    /// Showing the hovered tab.
    ResolvedPreview,
}

/// Snapshot of the indicator, re-emitted after every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TabIndicatorState {
    /// Tab the user clicked; drives the content panel.
    pub committed: TabId,
    /// Tab currently hovered, if any; drives the indicator only.
    pub preview: Option<TabId>,
    /// Rectangle to draw, or `None` while unresolved.
    pub geometry: Option<TabRect>,
    /// Whether the indicator should be drawn at all.
    pub visible: bool,
}

impl TabIndicatorState {
    /// Tab whose geometry the indicator follows.
    #[must_use]
    pub fn indicated_tab(&self) -> &TabId {
        self.preview.as_ref().unwrap_or(&self.committed)
    }

    /// Tab whose content panel is shown. Never follows the preview.
    #[must_use]
    pub fn content_tab(&self) -> &TabId {
        &self.committed
    }

    /// Phase of the state machine this snapshot is in.
    #[must_use]
    pub fn phase(&self) -> IndicatorPhase {
        match (self.visible, self.preview.is_some()) {
            (false, _) => IndicatorPhase::Unresolved,
            (true, false) => IndicatorPhase::ResolvedCommitted,
            (true, true) => IndicatorPhase::ResolvedPreview,
        }
    }
}

/// Owns the indicator selection state and its measurement lifecycle.
pub struct TabIndicatorController {
    tabs: TabSet,
    committed: TabId,
    preview: Option<TabId>,
    geometry: Option<TabRect>,
    settle_delay: SettleDelay,
    scheduler: Box<dyn LayoutScheduler>,
    resize: Option<Box<dyn ResizeSubscription>>,
    pending: Option<MeasurementTicket>,
    next_ticket: u64,
    disposed: bool,
}

impl fmt::Debug for TabIndicatorController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabIndicatorController")
            .field("tabs", &self.tabs)
            .field("committed", &self.committed)
            .field("preview", &self.preview)
            .field("geometry", &self.geometry)
            .field("pending", &self.pending)
            .field("subscribed", &self.resize.is_some())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl TabIndicatorController {
    /// Mounts the controller: commits the default tab, subscribes to resize
    /// signals and schedules the first measurement.
    pub fn mount(
        tabs: TabSet,
        settle_delay: SettleDelay,
        scheduler: Box<dyn LayoutScheduler>,
        resize_source: &dyn ResizeEventSource,
    ) -> Self {
        let committed = tabs.default_tab().clone();
        let mut controller = Self {
            tabs,
            committed,
            preview: None,
            geometry: None,
            settle_delay,
            scheduler,
            resize: Some(resize_source.subscribe()),
            pending: None,
            next_ticket: 0,
            disposed: false,
        };
        controller.schedule_measurement();
        controller
    }

    /// Known tabs.
    #[must_use]
    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    /// Ticket of the measurement currently awaiting delivery, if any.
    #[must_use]
    pub fn pending_measurement(&self) -> Option<MeasurementTicket> {
        self.pending
    }

    /// Returns true once [`dispose`](Self::dispose) ran.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Returns true while the resize subscription is held.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.resize.is_some()
    }

    /// Commits `id` and clears any preview.
    ///
    /// Changing the committed tab, or committing one that is still
    /// unmeasured, schedules a fresh deferred measurement and cancels the
    /// previous one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTabIdentifier`] if `id` is not a known tab;
    /// the state is left unchanged.
    pub fn select_tab<R>(&mut self, id: &str, registry: &R) -> Result<TabIndicatorState>
    where
        R: TabGeometryRegistry + ?Sized,
    {
        let tab = self.known(id)?;
        let changed = tab != self.committed;
        self.committed = tab;
        self.preview = None;
        self.resolve(registry);
        if self.geometry.is_none() {
            warn!(tab = %self.committed, "selected tab has no measured geometry");
        }
        if changed || self.geometry.is_none() {
            self.schedule_measurement();
        }
        Ok(self.state())
    }

    /// Points the indicator at a hovered tab without committing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTabIdentifier`] if `id` is not a known tab;
    /// the state is left unchanged.
    pub fn preview_tab<R>(&mut self, id: &str, registry: &R) -> Result<TabIndicatorState>
    where
        R: TabGeometryRegistry + ?Sized,
    {
        let tab = self.known(id)?;
        self.preview = Some(tab);
        self.resolve(registry);
        Ok(self.state())
    }

    /// Drops the hover preview when the pointer leaves the tab group, falling
    /// back to the committed tab. No-op without a preview.
    pub fn clear_preview<R>(&mut self, registry: &R) -> TabIndicatorState
    where
        R: TabGeometryRegistry + ?Sized,
    {
        if self.preview.take().is_some() {
            self.resolve(registry);
        }
        self.state()
    }

    /// Re-resolves geometry for the active tab after layout settled.
    pub fn on_layout_settled<R>(&mut self, registry: &R) -> TabIndicatorState
    where
        R: TabGeometryRegistry + ?Sized,
    {
        self.resolve(registry);
        self.state()
    }

    /// Applies a deferred measurement.
    ///
    /// Returns `None` without touching the state if `ticket` is not the
    /// pending measurement (cancelled, superseded or already applied).
    pub fn on_measurement_due<R>(
        &mut self,
        ticket: MeasurementTicket,
        registry: &R,
    ) -> Option<TabIndicatorState>
    where
        R: TabGeometryRegistry + ?Sized,
    {
        // The scheduler may deliver a ticket it could not cancel in time.
        if self.pending != Some(ticket) {
            trace!(%ticket, pending = ?self.pending, "dropping stale measurement");
            return None;
        }
        self.pending = None;
        Some(self.on_layout_settled(registry))
    }

    /// Re-resolves geometry if the container was resized since the last poll.
    pub fn poll_resize<R>(&mut self, registry: &R) -> Option<TabIndicatorState>
    where
        R: TabGeometryRegistry + ?Sized,
    {
        let resized = self.resize.as_mut().is_some_and(|sub| sub.take_resized());
        resized.then(|| self.on_layout_settled(registry))
    }

    /// Replaces the known tabs.
    ///
    /// Geometry becomes unresolved until the deferred measurement lands. The
    /// committed tab falls back to the new default if it disappeared, and a
    /// preview of a removed tab is dropped.
    pub fn set_tab_set(&mut self, tabs: TabSet) -> TabIndicatorState {
        if !tabs.contains(self.committed.as_str()) {
            self.committed = tabs.default_tab().clone();
        }
        if self
            .preview
            .as_ref()
            .is_some_and(|preview| !tabs.contains(preview.as_str()))
        {
            self.preview = None;
        }
        self.tabs = tabs;
        self.geometry = None;
        debug!(tabs = self.tabs.len(), committed = %self.committed, "tab set changed");
        self.schedule_measurement();
        self.state()
    }

    /// Cancels the pending measurement and releases the resize subscription.
    /// No measurement is scheduled afterwards. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.disposed = true;
        if let Some(ticket) = self.pending.take() {
            self.scheduler.cancel(ticket);
        }
        if self.resize.take().is_some() {
            debug!("tab indicator unsubscribed from resize events");
        }
    }

    /// Current indicator snapshot.
    #[must_use]
    pub fn state(&self) -> TabIndicatorState {
        TabIndicatorState {
            committed: self.committed.clone(),
            preview: self.preview.clone(),
            geometry: self.geometry,
            visible: self.geometry.is_some(),
        }
    }

    fn known(&self, id: &str) -> Result<TabId> {
        self.tabs.resolve(id).cloned().ok_or_else(|| {
            warn!(tab = id, "rejecting unknown tab identifier");
            Error::InvalidTabIdentifier(id.to_string())
        })
    }

    fn resolve<R>(&mut self, registry: &R)
    where
        R: TabGeometryRegistry + ?Sized,
    {
        let active = self.preview.as_ref().unwrap_or(&self.committed);
        self.geometry = registry.lookup(active).filter(|rect| !rect.is_degenerate());
        if self.geometry.is_none() {
            debug!(tab = %active, "indicator geometry unresolved");
        }
    }

    fn schedule_measurement(&mut self) {
        if let Some(previous) = self.pending.take() {
            self.scheduler.cancel(previous);
        }
        if self.disposed {
            trace!("indicator disposed, not scheduling a measurement");
            return;
        }
        let ticket = MeasurementTicket::new(self.next_ticket);
        self.next_ticket += 1;
        self.scheduler.schedule(ticket, self.settle_delay.as_duration());
        self.pending = Some(ticket);
    }
}

impl Drop for TabIndicatorController {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::tab::{ABOUT, EXPERIENCES, RECOMMENDED};
    use crate::infrastructure::{BroadcastResizeSource, GeometryMap, QueuedLayoutScheduler};
    use crate::test_utils::assert_abs_diff_eq;

    struct Harness {
        scheduler: QueuedLayoutScheduler,
        resize: BroadcastResizeSource,
        geometry: GeometryMap,
        controller: TabIndicatorController,
    }

    fn measured() -> GeometryMap {
        let mut geometry = GeometryMap::new();
        geometry.record(TabId::new(ABOUT), TabRect::new(6.0, 120.0));
        geometry.record(TabId::new(EXPERIENCES), TabRect::new(130.0, 140.0));
        geometry.record(TabId::new(RECOMMENDED), TabRect::new(274.0, 150.0));
        geometry
    }

    fn harness(geometry: GeometryMap) -> Harness {
        let scheduler = QueuedLayoutScheduler::new();
        let resize = BroadcastResizeSource::new();
        let controller = TabIndicatorController::mount(
            TabSet::default(),
            SettleDelay::default(),
            Box::new(scheduler.clone()),
            &resize,
        );
        Harness {
            scheduler,
            resize,
            geometry,
            controller,
        }
    }

    #[test]
    fn mount_starts_unresolved_with_pending_measurement() {
        let h = harness(measured());
        let state = h.controller.state();
        assert_eq!(state.committed.as_str(), ABOUT);
        assert_eq!(state.phase(), IndicatorPhase::Unresolved);
        assert!(!state.visible);
        assert_eq!(h.scheduler.pending(), vec![h.controller.pending_measurement().unwrap()]);
        assert_eq!(h.resize.subscriber_count(), 1);
    }

    #[test]
    fn first_measurement_resolves_committed_tab() {
        let mut h = harness(measured());
        let ticket = h.scheduler.drain().remove(0);
        let state = h
            .controller
            .on_measurement_due(ticket, &h.geometry)
            .expect("pending ticket applies");
        assert_eq!(state.phase(), IndicatorPhase::ResolvedCommitted);
        let rect = state.geometry.unwrap();
        assert_abs_diff_eq!(rect.left, 6.0);
        assert_abs_diff_eq!(rect.width, 120.0);
        assert!(h.controller.pending_measurement().is_none());
    }

    #[test]
    fn measurement_applies_only_once() {
        let mut h = harness(measured());
        let ticket = h.scheduler.drain().remove(0);
        assert!(h.controller.on_measurement_due(ticket, &h.geometry).is_some());
        assert!(h.controller.on_measurement_due(ticket, &h.geometry).is_none());
    }

    #[test]
    fn select_then_clear_preview_equals_select() {
        let mut h = harness(measured());
        let selected = h.controller.select_tab(EXPERIENCES, &h.geometry).unwrap();
        let cleared = h.controller.clear_preview(&h.geometry);
        assert_eq!(selected, cleared);
        assert_eq!(cleared.phase(), IndicatorPhase::ResolvedCommitted);
    }

    #[test]
    fn select_clears_preview() {
        let mut h = harness(measured());
        h.controller.preview_tab(RECOMMENDED, &h.geometry).unwrap();
        let state = h.controller.select_tab(ABOUT, &h.geometry).unwrap();
        assert_eq!(state.committed.as_str(), ABOUT);
        assert!(state.preview.is_none());
    }

    #[test]
    fn preview_overrides_geometry_but_not_content() {
        let mut h = harness(measured());
        h.controller.select_tab(ABOUT, &h.geometry).unwrap();
        let state = h.controller.preview_tab(RECOMMENDED, &h.geometry).unwrap();

        assert_eq!(state.phase(), IndicatorPhase::ResolvedPreview);
        assert_eq!(state.indicated_tab().as_str(), RECOMMENDED);
        assert_eq!(state.content_tab().as_str(), ABOUT);
        assert_abs_diff_eq!(state.geometry.unwrap().left, 274.0);

        let state = h.controller.clear_preview(&h.geometry);
        assert_eq!(state.phase(), IndicatorPhase::ResolvedCommitted);
        assert_abs_diff_eq!(state.geometry.unwrap().left, 6.0);
    }

    #[test]
    fn unknown_tab_is_rejected_without_state_change() {
        let mut h = harness(measured());
        h.controller.select_tab(EXPERIENCES, &h.geometry).unwrap();
        let before = h.controller.state();

        let err = h
            .controller
            .select_tab("not-a-real-tab", &h.geometry)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTabIdentifier(ref id) if id == "not-a-real-tab"));
        assert_eq!(h.controller.state(), before);

        assert!(h.controller.preview_tab("nope", &h.geometry).is_err());
        assert_eq!(h.controller.state(), before);
    }

    #[test]
    fn resolved_select_schedules_fresh_measurement() {
        let mut h = harness(measured());
        let mount_ticket = h.scheduler.drain().remove(0);
        h.controller.on_measurement_due(mount_ticket, &h.geometry);
        assert!(h.controller.pending_measurement().is_none());

        let state = h.controller.select_tab(EXPERIENCES, &h.geometry).unwrap();
        assert_eq!(state.phase(), IndicatorPhase::ResolvedCommitted);
        let first = h.controller.pending_measurement().expect("select schedules");
        assert_eq!(h.scheduler.pending(), vec![first]);

        h.controller.select_tab(RECOMMENDED, &h.geometry).unwrap();
        let second = h.controller.pending_measurement().unwrap();
        assert_ne!(first, second);
        assert_eq!(h.scheduler.pending(), vec![second]);
        assert!(h.controller.on_measurement_due(first, &h.geometry).is_none());

        h.geometry.record(TabId::new(RECOMMENDED), TabRect::new(280.0, 150.0));
        let state = h.controller.on_measurement_due(second, &h.geometry).unwrap();
        assert_abs_diff_eq!(state.geometry.unwrap().left, 280.0);
    }

    #[test]
    fn reselecting_resolved_tab_keeps_pending_measurement() {
        let mut h = harness(measured());
        let mount_ticket = h.scheduler.drain().remove(0);
        h.controller.on_measurement_due(mount_ticket, &h.geometry);

        h.controller.select_tab(ABOUT, &h.geometry).unwrap();
        assert!(h.controller.pending_measurement().is_none());
        assert!(h.scheduler.pending().is_empty());
    }

    #[test]
    fn missing_geometry_stays_unresolved_and_reschedules() {
        let mut h = harness(GeometryMap::new());
        let mount_ticket = h.controller.pending_measurement().unwrap();

        let state = h.controller.select_tab(EXPERIENCES, &h.geometry).unwrap();
        assert_eq!(state.phase(), IndicatorPhase::Unresolved);

        let retry = h.controller.pending_measurement().unwrap();
        assert_ne!(retry, mount_ticket);
        assert_eq!(h.scheduler.pending(), vec![retry]);

        h.geometry = measured();
        let state = h.controller.on_measurement_due(retry, &h.geometry).unwrap();
        assert_eq!(state.phase(), IndicatorPhase::ResolvedCommitted);
        assert_abs_diff_eq!(state.geometry.unwrap().left, 130.0);
    }

    #[test]
    fn zero_width_geometry_is_treated_as_unresolved() {
        let mut geometry = measured();
        geometry.record(TabId::new(ABOUT), TabRect::new(0.0, 0.0));
        let mut h = harness(geometry);
        let state = h.controller.on_layout_settled(&h.geometry);
        assert!(!state.visible);
        assert!(state.geometry.is_none());
    }

    #[test]
    fn hovering_unmeasured_tab_hides_indicator() {
        let mut geometry = measured();
        geometry.forget(&TabId::new(RECOMMENDED));
        let mut h = harness(geometry);
        h.controller.on_layout_settled(&h.geometry);

        let state = h.controller.preview_tab(RECOMMENDED, &h.geometry).unwrap();
        assert_eq!(state.phase(), IndicatorPhase::Unresolved);
        assert_eq!(state.preview.as_ref().map(TabId::as_str), Some(RECOMMENDED));

        let state = h.controller.clear_preview(&h.geometry);
        assert_eq!(state.phase(), IndicatorPhase::ResolvedCommitted);
    }

    #[test]
    fn layout_settled_keeps_active_tab() {
        let mut h = harness(measured());
        h.controller.preview_tab(EXPERIENCES, &h.geometry).unwrap();
        h.geometry.record(TabId::new(EXPERIENCES), TabRect::new(100.0, 90.0));

        let state = h.controller.on_layout_settled(&h.geometry);
        assert_eq!(state.indicated_tab().as_str(), EXPERIENCES);
        assert_abs_diff_eq!(state.geometry.unwrap().left, 100.0);
    }

    #[test]
    fn stale_tab_set_measurement_is_never_applied() {
        let mut h = harness(measured());
        let set_a = TabSet::new([ABOUT, EXPERIENCES]).unwrap();
        let set_b = TabSet::new([EXPERIENCES, RECOMMENDED]).unwrap();

        h.controller.set_tab_set(set_a);
        let ticket_a = h.controller.pending_measurement().unwrap();
        let state = h.controller.set_tab_set(set_b);
        let ticket_b = h.controller.pending_measurement().unwrap();

        assert_eq!(state.committed.as_str(), EXPERIENCES);
        assert_eq!(h.scheduler.pending(), vec![ticket_b]);

        // Even if A is delivered anyway, it must not touch B's state.
        assert!(h.controller.on_measurement_due(ticket_a, &h.geometry).is_none());
        assert!(!h.controller.state().visible);

        let state = h.controller.on_measurement_due(ticket_b, &h.geometry).unwrap();
        assert!(state.visible);
        assert_abs_diff_eq!(state.geometry.unwrap().left, 130.0);
    }

    #[test]
    fn tab_set_change_drops_removed_preview() {
        let mut h = harness(measured());
        h.controller.select_tab(EXPERIENCES, &h.geometry).unwrap();
        h.controller.preview_tab(RECOMMENDED, &h.geometry).unwrap();

        let state = h.controller.set_tab_set(TabSet::new([ABOUT, EXPERIENCES]).unwrap());
        assert!(state.preview.is_none());
        assert_eq!(state.committed.as_str(), EXPERIENCES);
        assert_eq!(state.phase(), IndicatorPhase::Unresolved);
    }

    #[test]
    fn resize_triggers_re_resolution() {
        let mut h = harness(measured());
        h.controller.on_layout_settled(&h.geometry);
        assert!(h.controller.poll_resize(&h.geometry).is_none());

        h.geometry.record(TabId::new(ABOUT), TabRect::new(4.0, 96.0));
        h.resize.notify();
        h.resize.notify();

        let state = h.controller.poll_resize(&h.geometry).expect("resize seen");
        assert_abs_diff_eq!(state.geometry.unwrap().width, 96.0);
        assert!(h.controller.poll_resize(&h.geometry).is_none());
    }

    #[test]
    fn dispose_cancels_and_unsubscribes() {
        let mut h = harness(measured());
        h.controller.dispose();
        assert!(h.scheduler.pending().is_empty());
        assert_eq!(h.resize.subscriber_count(), 0);
        assert!(!h.controller.is_subscribed());
        assert!(h.controller.poll_resize(&h.geometry).is_none());

        h.controller.dispose();
    }

    #[test]
    fn commands_after_dispose_schedule_nothing() {
        let mut h = harness(GeometryMap::new());
        h.controller.dispose();

        let state = h.controller.select_tab(EXPERIENCES, &h.geometry).unwrap();
        assert_eq!(state.committed.as_str(), EXPERIENCES);
        h.controller.set_tab_set(TabSet::new(["a"]).unwrap());

        assert!(h.controller.is_disposed());
        assert!(h.controller.pending_measurement().is_none());
        assert!(h.scheduler.pending().is_empty());
    }

    #[test]
    fn drop_releases_resources() {
        let h = harness(measured());
        let scheduler = h.scheduler.clone();
        let resize = h.resize.clone();
        drop(h);
        assert!(scheduler.pending().is_empty());
        assert_eq!(resize.subscriber_count(), 0);
    }

    #[test]
    fn repeated_select_is_idempotent() {
        let mut h = harness(measured());
        let first = h.controller.select_tab(RECOMMENDED, &h.geometry).unwrap();
        let second = h.controller.select_tab(RECOMMENDED, &h.geometry).unwrap();
        assert_eq!(first, second);
    }
}
