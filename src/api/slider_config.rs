use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::MarkerLabelConfig;
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::PointerKind;

/// Public slider configuration.
///
/// Serializable so hosts can keep slider tuning next to their dashboard
/// layout instead of hard-coding it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineSliderConfig {
    /// Minimum visual separation between the two handles.
    #[serde(default = "default_min_gap_px")]
    pub min_gap_px: f64,
    /// Half-width of the grab zone around each handle.
    #[serde(default = "default_handle_hit_half_width_px")]
    pub handle_hit_half_width_px: f64,
    /// Settle window after mouse/pen releases and button actions.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Settle window after touch releases.
    #[serde(default = "default_touch_settle_delay_ms")]
    pub touch_settle_delay_ms: u64,
    #[serde(default)]
    pub marker_labels: MarkerLabelConfig,
}

impl Default for TimelineSliderConfig {
    fn default() -> Self {
        Self {
            min_gap_px: default_min_gap_px(),
            handle_hit_half_width_px: default_handle_hit_half_width_px(),
            settle_delay_ms: default_settle_delay_ms(),
            touch_settle_delay_ms: default_touch_settle_delay_ms(),
            marker_labels: MarkerLabelConfig::default(),
        }
    }
}

impl TimelineSliderConfig {
    /// Loads and validates a JSON config; missing fields take defaults.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn with_min_gap_px(mut self, min_gap_px: f64) -> Self {
        self.min_gap_px = min_gap_px;
        self
    }

    #[must_use]
    pub fn with_handle_hit_half_width_px(mut self, half_width_px: f64) -> Self {
        self.handle_hit_half_width_px = half_width_px;
        self
    }

    /// Sets the settle windows for mouse/pen and touch input.
    #[must_use]
    pub fn with_settle_delays_ms(mut self, settle_delay_ms: u64, touch_settle_delay_ms: u64) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self.touch_settle_delay_ms = touch_settle_delay_ms;
        self
    }

    #[must_use]
    pub fn with_marker_labels(mut self, marker_labels: MarkerLabelConfig) -> Self {
        self.marker_labels = marker_labels;
        self
    }

    /// Settle window for a gesture released by `kind`.
    #[must_use]
    pub fn settle_delay_for(&self, kind: PointerKind) -> Duration {
        match kind {
            PointerKind::Touch => Duration::from_millis(self.touch_settle_delay_ms),
            PointerKind::Mouse | PointerKind::Pen => Duration::from_millis(self.settle_delay_ms),
        }
    }

    /// Settle window for button actions (quick range, shift, custom entry).
    #[must_use]
    pub fn action_settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if !self.min_gap_px.is_finite() || self.min_gap_px < 0.0 {
            return Err(TimelineError::InvalidConfig(
                "min_gap_px must be finite and >= 0".to_owned(),
            ));
        }
        if !self.handle_hit_half_width_px.is_finite() || self.handle_hit_half_width_px <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "handle_hit_half_width_px must be finite and > 0".to_owned(),
            ));
        }
        for (value, name) in [
            (self.settle_delay_ms, "settle_delay_ms"),
            (self.touch_settle_delay_ms, "touch_settle_delay_ms"),
        ] {
            if value > MAX_SETTLE_DELAY_MS {
                return Err(TimelineError::InvalidConfig(format!(
                    "`{name}` must be <= {MAX_SETTLE_DELAY_MS}ms, got {value}ms"
                )));
            }
        }
        self.marker_labels.validate()?;
        Ok(self)
    }
}

/// Longer windows make the handles ignore the host for a noticeable time.
const MAX_SETTLE_DELAY_MS: u64 = 5_000;

fn default_min_gap_px() -> f64 {
    8.0
}

fn default_handle_hit_half_width_px() -> f64 {
    8.0
}

fn default_settle_delay_ms() -> u64 {
    100
}

fn default_touch_settle_delay_ms() -> u64 {
    200
}
