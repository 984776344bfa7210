use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Domain, HandlePositions, QuickRange, TimeRange, TrackGeometry, TrackScale};

/// User action behind the current selection.
///
/// Hosts use it to highlight the active quick-range button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RangeSelectionKind {
    #[default]
    Custom,
    Shifted,
    Preset(QuickRange),
    Dragged,
}

/// Instant under the pointer while it hovers the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverReadout {
    pub position_px: f64,
    pub instant: DateTime<Utc>,
}

/// Semantic and pixel state of one slider.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) struct SliderModel {
    pub(super) domain: Option<Domain>,
    /// Latest range pushed by the host, whether or not it was applied.
    pub(super) external_range: Option<TimeRange>,
    pub(super) last_emitted: Option<TimeRange>,
    /// Range the handles currently stand for: the newest of the applied host
    /// value and the last emission.
    pub(super) selection: Option<TimeRange>,
    pub(super) selection_kind: RangeSelectionKind,
    pub(super) geometry: TrackGeometry,
    pub(super) handles: HandlePositions,
    pub(super) hover: Option<HoverReadout>,
}

impl SliderModel {
    /// Scale for the current domain and width; `None` until both are usable.
    pub(super) fn scale(&self) -> Option<TrackScale> {
        let domain = self.domain.filter(|domain| !domain.is_degenerate())?;
        self.geometry
            .is_laid_out()
            .then(|| TrackScale::new(domain, self.geometry))
    }
}
