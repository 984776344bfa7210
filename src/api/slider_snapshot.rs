use serde::{Deserialize, Serialize};

use crate::core::{Domain, HandlePositions, TimeMarker, TimeRange, generate_markers};
use crate::error::TimelineResult;
use crate::interaction::DragMode;

use super::{HoverReadout, RangeSelectionKind, TimelineSlider};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub domain: Option<Domain>,
    pub external_range: Option<TimeRange>,
    pub last_emitted: Option<TimeRange>,
    pub selection: Option<TimeRange>,
    pub selection_kind: RangeSelectionKind,
    pub width_px: f64,
    pub handles: HandlePositions,
    pub preview_range: Option<TimeRange>,
    pub drag_mode: DragMode,
    pub guard_engaged: bool,
    pub pending_settle_generation: Option<u64>,
    pub hover: Option<HoverReadout>,
    pub markers: Vec<TimeMarker>,
    pub listener_ids: Vec<String>,
}

impl TimelineSlider {
    /// Tick markers for the current domain and width.
    #[must_use]
    pub fn markers(&self) -> Vec<TimeMarker> {
        match self.model.domain {
            Some(domain) => generate_markers(
                domain,
                self.model.geometry.width_px,
                self.config.marker_labels,
            ),
            None => Vec::new(),
        }
    }

    /// Range the handles show right now, including mid-drag positions.
    #[must_use]
    pub fn preview_range(&self) -> Option<TimeRange> {
        self.model
            .scale()
            .map(|scale| scale.handles_to_range(self.model.handles))
    }

    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            domain: self.model.domain,
            external_range: self.model.external_range,
            last_emitted: self.model.last_emitted,
            selection: self.model.selection,
            selection_kind: self.model.selection_kind,
            width_px: self.model.geometry.width_px,
            handles: self.model.handles,
            preview_range: self.preview_range(),
            drag_mode: self.runtime.drag.mode(),
            guard_engaged: self.runtime.guard.is_engaged(),
            pending_settle_generation: self
                .runtime
                .guard
                .pending()
                .map(|ticket| ticket.generation()),
            hover: self.model.hover,
            markers: self.markers(),
            listener_ids: self.listener_ids(),
        }
    }

    pub fn snapshot_json(&self) -> TimelineResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}
