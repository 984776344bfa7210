use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::mapper::time_to_position;
use crate::core::primitives::{
    datetime_to_unix_millis, fixed_offset_from_minutes, unix_millis_to_datetime,
};
use crate::core::types::Domain;
use crate::error::{TimelineError, TimelineResult};

const HOUR_MS: i64 = 60 * 60 * 1_000;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;

/// Which part of the instant a marker label shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerGranularity {
    /// Sub-day steps: hour and minute.
    TimeOfDay,
    /// Day and week steps: day and month.
    CalendarDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerLabelLocale {
    #[default]
    DeDe,
    EnUs,
}

/// Presentation settings for marker labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarkerLabelConfig {
    #[serde(default)]
    pub locale: MarkerLabelLocale,
    /// Fixed offset applied before formatting, in minutes east of UTC.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl MarkerLabelConfig {
    pub fn validate(self) -> TimelineResult<Self> {
        if self.utc_offset_minutes.unsigned_abs() >= 24 * 60 {
            return Err(TimelineError::InvalidConfig(format!(
                "marker label utc offset must be within +/-24h, got {} minutes",
                self.utc_offset_minutes
            )));
        }
        Ok(self)
    }
}

/// Tick step chosen for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStep {
    pub millis: i64,
    pub granularity: MarkerGranularity,
}

/// A labeled tick on the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeMarker {
    pub position_px: f64,
    pub instant: DateTime<Utc>,
    pub granularity: MarkerGranularity,
    pub label: String,
}

/// Fixed policy table keyed by total domain duration.
#[must_use]
pub fn marker_step_for_span(span_millis: i64) -> MarkerStep {
    let millis = if span_millis <= DAY_MS {
        HOUR_MS
    } else if span_millis <= 7 * DAY_MS {
        6 * HOUR_MS
    } else if span_millis <= 30 * DAY_MS {
        DAY_MS
    } else {
        WEEK_MS
    };

    let granularity = if millis >= DAY_MS {
        MarkerGranularity::CalendarDate
    } else {
        MarkerGranularity::TimeOfDay
    };

    MarkerStep {
        millis,
        granularity,
    }
}

/// Keep every n-th marker on narrow tracks.
#[must_use]
pub fn thinning_factor(width_px: f64) -> usize {
    if width_px < 400.0 {
        3
    } else if width_px < 600.0 {
        2
    } else {
        1
    }
}

/// Derives the tick markers for a domain rendered on a track of `width_px`.
///
/// Markers start at `domain.min` and advance by the policy step. Thinning on
/// narrow tracks never drops the first or the last marker of the sequence.
/// Returns an empty list before layout or for a degenerate domain.
#[must_use]
pub fn generate_markers(
    domain: Domain,
    width_px: f64,
    labels: MarkerLabelConfig,
) -> Vec<TimeMarker> {
    if !width_px.is_finite() || width_px <= 0.0 || domain.is_degenerate() {
        return Vec::new();
    }

    let step = marker_step_for_span(domain.span_millis());
    let skip = thinning_factor(width_px);
    let count = usize::try_from(domain.span_millis() / step.millis)
        .unwrap_or(usize::MAX - 1)
        .saturating_add(1);
    let last_index = count - 1;
    let min_ms = datetime_to_unix_millis(domain.min);

    (0..count)
        .filter(|index| index % skip == 0 || *index == last_index)
        .map(|index| {
            let offset = step.millis.saturating_mul(index as i64);
            let instant = unix_millis_to_datetime(min_ms.saturating_add(offset));
            TimeMarker {
                position_px: time_to_position(instant, domain, width_px),
                instant,
                granularity: step.granularity,
                label: format_marker_label(instant, step.granularity, labels),
            }
        })
        .collect()
}

#[must_use]
pub fn format_marker_label(
    instant: DateTime<Utc>,
    granularity: MarkerGranularity,
    labels: MarkerLabelConfig,
) -> String {
    let local = instant.with_timezone(&fixed_offset_from_minutes(labels.utc_offset_minutes));
    let pattern = match (labels.locale, granularity) {
        (_, MarkerGranularity::TimeOfDay) => "%H:%M",
        (MarkerLabelLocale::DeDe, MarkerGranularity::CalendarDate) => "%d.%m.",
        (MarkerLabelLocale::EnUs, MarkerGranularity::CalendarDate) => "%m/%d",
    };
    local.format(pattern).to_string()
}
