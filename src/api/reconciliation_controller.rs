use std::time::Instant;

use tracing::debug;

use crate::core::{Domain, HandlePositions, TimeRange, TrackGeometry};
use crate::interaction::SettleTicket;

use super::{RangeSelectionKind, TimelineSlider};

impl TimelineSlider {
    /// Accepts the host's current selection.
    ///
    /// Applied to the handles only while no gesture is active and the guard
    /// is clear. A value held back after a local emission is applied when
    /// the guard releases unless it echoes that emission exactly.
    pub fn set_external_range(&mut self, range: TimeRange) {
        self.model.external_range = Some(range);
        if self.can_reposition() {
            self.apply_host_selection(range);
            self.resync_handles();
            return;
        }
        self.runtime.external_held = true;
        debug!(
            start = %range.start,
            end = %range.end,
            dragging = self.runtime.drag.is_dragging(),
            "external range held back by reconciliation guard"
        );
    }

    pub fn set_domain(&mut self, domain: Domain) {
        self.model.domain = Some(domain);
        self.relayout_or_defer("domain");
    }

    /// Updates the track width after a host layout pass.
    ///
    /// A gesture in flight is rescaled so the handles keep their instants.
    /// While the width is 0 the gesture keeps the pixels of the last laid-out
    /// track and is rescaled once a width arrives again.
    pub fn set_track_width(&mut self, width_px: f64) {
        self.model.geometry = TrackGeometry::new(width_px);
        let current = self.model.geometry;
        if self.runtime.drag.is_dragging() && current.is_laid_out() {
            self.rescale_gesture(current.width_px);
        }
        self.relayout_or_defer("track width");
    }

    /// Releases the guard when the pending settle deadline has passed.
    pub fn poll_settle(&mut self, now: Instant) -> bool {
        if !self.runtime.guard.poll(now) {
            return false;
        }
        self.on_guard_released();
        true
    }

    /// Fires a settle timer scheduled by the host.
    ///
    /// Tickets superseded by a later gesture or action are ignored.
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        if !self.runtime.guard.release(ticket) {
            debug!(
                generation = ticket.generation(),
                "ignoring superseded settle ticket"
            );
            return false;
        }
        self.on_guard_released();
        true
    }

    fn rescale_gesture(&mut self, width_px: f64) {
        let reference_px = self.runtime.gesture_width_px;
        self.runtime.gesture_width_px = width_px;
        if reference_px <= 0.0 || reference_px == width_px {
            return;
        }

        let factor = width_px / reference_px;
        let min_gap_px = self.config.min_gap_px;
        self.model.handles = HandlePositions::new(
            self.model.handles.start_px * factor,
            self.model.handles.end_px * factor,
        )
        .with_min_gap(width_px, min_gap_px);
        self.runtime.drag.rescale(factor, width_px, min_gap_px);
    }

    fn can_reposition(&self) -> bool {
        !self.runtime.guard.is_engaged() && !self.runtime.drag.is_dragging()
    }

    /// Idle handles follow layout changes at once; a gesture in flight keeps
    /// its positions until the guard releases.
    fn relayout_or_defer(&mut self, reason: &'static str) {
        if self.runtime.drag.is_dragging() {
            debug!(reason, "layout change deferred until the gesture settles");
            self.runtime.stale_layout = true;
        } else {
            self.resync_handles();
        }
    }

    fn on_guard_released(&mut self) {
        let host_rewrote = self.runtime.external_held
            && self
                .model
                .external_range
                .is_some_and(|external| Some(external) != self.model.last_emitted);
        self.runtime.external_held = false;
        let stale_layout = self.runtime.stale_layout;
        debug!(host_rewrote, stale_layout, "reconciliation guard released");
        if let Some(external) = self.model.external_range.filter(|_| host_rewrote) {
            self.apply_host_selection(external);
        }
        if host_rewrote || stale_layout {
            self.resync_handles();
        }
    }

    fn apply_host_selection(&mut self, range: TimeRange) {
        if self.model.selection != Some(range) {
            self.model.selection_kind = RangeSelectionKind::Custom;
        }
        self.model.selection = Some(range);
    }

    /// Recomputes handle positions from the current selection; the handles
    /// span the whole track before any selection exists.
    pub(super) fn resync_handles(&mut self) {
        self.runtime.stale_layout = false;
        let width_px = self.model.geometry.width_px;
        let Some(scale) = self.model.scale() else {
            self.model.handles = HandlePositions::new(0.0, width_px);
            return;
        };

        let range = self
            .model
            .selection
            .unwrap_or(TimeRange::full(scale.domain()));
        self.model.handles = scale
            .range_to_handles(range)
            .with_min_gap(width_px, self.config.min_gap_px);
    }
}
