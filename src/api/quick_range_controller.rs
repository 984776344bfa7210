use std::time::Instant;

use tracing::debug;

use crate::core::primitives::fixed_offset_from_minutes;
use crate::core::{
    CustomRangeFields, Domain, QuickRange, ShiftDirection, TimeRange, compute_relative_range,
    parse_custom_range, shift_range,
};
use crate::error::TimelineResult;
use crate::extensions::{RangeChange, RangeChangeCause};

use super::{RangeSelectionKind, TimelineSlider};

impl TimelineSlider {
    /// Selects the trailing window `kind` ending at the domain maximum.
    ///
    /// Ignored while a gesture is active or before a domain is known.
    pub fn apply_quick_range(&mut self, kind: QuickRange, now: Instant) -> Option<RangeChange> {
        let domain = self.action_domain("quick range")?;
        let range = compute_relative_range(kind, domain);
        Some(self.commit_local_range(
            range,
            RangeChangeCause::QuickRange(kind),
            RangeSelectionKind::Preset(kind),
            now,
        ))
    }

    /// Moves the selection by its own span in `direction`.
    pub fn shift(&mut self, direction: ShiftDirection, now: Instant) -> Option<RangeChange> {
        let domain = self.action_domain("shift")?;
        let range = shift_range(self.effective_range(domain), direction, domain);
        Some(self.commit_local_range(
            range,
            RangeChangeCause::Shift(direction),
            RangeSelectionKind::Shifted,
            now,
        ))
    }

    /// Selects an explicit range, clamped to the domain.
    pub fn apply_custom_range(&mut self, range: TimeRange, now: Instant) -> Option<RangeChange> {
        let domain = self.action_domain("custom range")?;
        Some(self.commit_local_range(
            range.clamped_to(domain),
            RangeChangeCause::CustomEntry,
            RangeSelectionKind::Custom,
            now,
        ))
    }

    /// Parses the panel's date/time fields in the label offset and applies them.
    ///
    /// Text errors are returned; a gesture in progress yields `Ok(None)`.
    pub fn apply_custom_fields(
        &mut self,
        fields: CustomRangeFields<'_>,
        now: Instant,
    ) -> TimelineResult<Option<RangeChange>> {
        let offset = fixed_offset_from_minutes(self.config.marker_labels.utc_offset_minutes);
        let range = parse_custom_range(fields, offset)?;
        Ok(self.apply_custom_range(range, now))
    }

    fn action_domain(&self, action: &'static str) -> Option<Domain> {
        if self.runtime.drag.is_dragging() {
            debug!(action, "ignoring range action during an active drag");
            return None;
        }
        let domain = self.model.domain;
        if domain.is_none() {
            debug!(action, "ignoring range action before a domain is known");
        }
        domain
    }

    /// Emits a locally computed range, moves the handles to it right away and
    /// arms the settle timer.
    fn commit_local_range(
        &mut self,
        range: TimeRange,
        cause: RangeChangeCause,
        kind: RangeSelectionKind,
        now: Instant,
    ) -> RangeChange {
        let ticket = self
            .runtime
            .guard
            .arm_release(now, self.config.action_settle_delay());
        debug!(
            ?cause,
            settle_generation = ticket.generation(),
            "local range action"
        );
        self.model.selection_kind = kind;
        let change = self.emit_range_change(RangeChange { range, cause });
        self.resync_handles();
        change
    }
}
