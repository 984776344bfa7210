use crate::core::{Domain, HandlePositions, QuickRange, TimeRange, describe_span};
use crate::interaction::{DragMode, DragSession, SettleTicket};

use super::{HoverReadout, RangeSelectionKind, TimelineSlider, TimelineSliderConfig};

impl TimelineSlider {
    #[must_use]
    pub fn config(&self) -> TimelineSliderConfig {
        self.config
    }

    #[must_use]
    pub fn domain(&self) -> Option<Domain> {
        self.model.domain
    }

    /// Latest range pushed by the host, including ones not yet applied.
    #[must_use]
    pub fn external_range(&self) -> Option<TimeRange> {
        self.model.external_range
    }

    #[must_use]
    pub fn last_emitted(&self) -> Option<TimeRange> {
        self.model.last_emitted
    }

    /// Range the handles stand for, before clamping to the domain.
    #[must_use]
    pub fn selection(&self) -> Option<TimeRange> {
        self.model.selection
    }

    #[must_use]
    pub fn selection_kind(&self) -> RangeSelectionKind {
        self.model.selection_kind
    }

    /// Quick range whose button should render as active.
    #[must_use]
    pub fn active_quick_range(&self) -> Option<QuickRange> {
        match self.model.selection_kind {
            RangeSelectionKind::Preset(kind) => Some(kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn track_width(&self) -> f64 {
        self.model.geometry.width_px
    }

    #[must_use]
    pub fn handles(&self) -> HandlePositions {
        self.model.handles
    }

    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        self.runtime.drag.mode()
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<DragSession> {
        self.runtime.drag.session()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.runtime.drag.is_dragging()
    }

    #[must_use]
    pub fn is_guard_engaged(&self) -> bool {
        self.runtime.guard.is_engaged()
    }

    /// Settle timer the host must fire, if any.
    #[must_use]
    pub fn pending_settle(&self) -> Option<SettleTicket> {
        self.runtime.guard.pending()
    }

    #[must_use]
    pub fn hover_readout(&self) -> Option<HoverReadout> {
        self.model.hover
    }

    /// Header text for the selection, e.g. `"1 Tag 2 Std."`.
    #[must_use]
    pub fn selection_summary(&self) -> Option<String> {
        let domain = self.model.domain?;
        Some(describe_span(self.effective_range(domain).span()))
    }

    /// Range the slider acts on; the whole domain before any selection.
    pub(super) fn effective_range(&self, domain: Domain) -> TimeRange {
        self.model
            .selection
            .map_or(TimeRange::full(domain), |range| range.clamped_to(domain))
    }
}
