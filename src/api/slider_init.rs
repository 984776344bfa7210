use tracing::{debug, warn};

use crate::core::{Domain, TimeRange, TrackGeometry};
use crate::error::TimelineResult;

use super::{
    TimelineSlider, TimelineSliderConfig, slider_model::SliderModel,
    slider_runtime::SliderRuntime,
};

impl TimelineSlider {
    /// Creates an idle slider with no domain and an unlaid track.
    pub fn new(config: TimelineSliderConfig) -> TimelineResult<Self> {
        let config = config.validate().inspect_err(|err| {
            warn!(error = %err, "rejected timeline slider config");
        })?;

        Ok(Self {
            config,
            model: SliderModel::default(),
            runtime: SliderRuntime::default(),
        })
    }

    /// Creates a slider already bound to a domain, a selection and a width.
    pub fn with_state(
        config: TimelineSliderConfig,
        domain: Domain,
        range: Option<TimeRange>,
        width_px: f64,
    ) -> TimelineResult<Self> {
        let mut slider = Self::new(config)?;
        slider.model.domain = Some(domain);
        slider.model.external_range = range;
        slider.model.selection = range;
        slider.model.geometry = TrackGeometry::new(width_px);
        slider.resync_handles();
        debug!(
            width_px = slider.model.geometry.width_px,
            has_range = range.is_some(),
            "timeline slider initialized"
        );
        Ok(slider)
    }

    /// Replaces the configuration; handles are re-laid out unless a gesture
    /// is in flight.
    pub fn set_config(&mut self, config: TimelineSliderConfig) -> TimelineResult<()> {
        self.config = config.validate().inspect_err(|err| {
            warn!(error = %err, "rejected timeline slider config update");
        })?;
        if self.runtime.drag.is_dragging() {
            self.runtime.stale_layout = true;
        } else {
            self.resync_handles();
        }
        Ok(())
    }
}
