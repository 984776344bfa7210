//! Linear mapping between track pixels and instants.
//!
//! Both directions are total: a track without layout or a degenerate domain
//! maps everything to position `0` / `domain.min` instead of dividing by zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{clamp_px, datetime_to_unix_millis, unix_millis_to_datetime};
use crate::core::types::{Domain, HandlePositions, TimeRange, TrackGeometry};

/// Maps an instant to a pixel offset clamped to `[0, width_px]`.
#[must_use]
pub fn time_to_position(instant: DateTime<Utc>, domain: Domain, width_px: f64) -> f64 {
    if !is_mappable(domain, width_px) {
        return 0.0;
    }

    let span = domain.span_millis() as f64;
    let offset = (datetime_to_unix_millis(instant) - datetime_to_unix_millis(domain.min)) as f64;
    clamp_px(offset / span * width_px, 0.0, width_px)
}

/// Maps a pixel offset to an instant inside `[domain.min, domain.max]`.
///
/// The input is clamped to the track before mapping; the result is rounded to
/// whole milliseconds.
#[must_use]
pub fn position_to_time(px: f64, domain: Domain, width_px: f64) -> DateTime<Utc> {
    if !is_mappable(domain, width_px) {
        return domain.min;
    }

    let fraction = clamp_px(px, 0.0, width_px) / width_px;
    let offset = (fraction * domain.span_millis() as f64).round() as i64;
    domain.clamp(unix_millis_to_datetime(
        datetime_to_unix_millis(domain.min).saturating_add(offset),
    ))
}

fn is_mappable(domain: Domain, width_px: f64) -> bool {
    width_px.is_finite() && width_px > 0.0 && !domain.is_degenerate()
}

/// Domain bound to a concrete track width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackScale {
    domain: Domain,
    geometry: TrackGeometry,
}

impl TrackScale {
    #[must_use]
    pub fn new(domain: Domain, geometry: TrackGeometry) -> Self {
        Self { domain, geometry }
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        self.geometry.width_px
    }

    #[must_use]
    pub fn time_to_pixel(self, instant: DateTime<Utc>) -> f64 {
        time_to_position(instant, self.domain, self.geometry.width_px)
    }

    #[must_use]
    pub fn pixel_to_time(self, px: f64) -> DateTime<Utc> {
        position_to_time(px, self.domain, self.geometry.width_px)
    }

    /// Projects a selection onto the track, clamping it into the domain first.
    #[must_use]
    pub fn range_to_handles(self, range: TimeRange) -> HandlePositions {
        let range = range.clamped_to(self.domain);
        HandlePositions::new(self.time_to_pixel(range.start), self.time_to_pixel(range.end))
    }

    #[must_use]
    pub fn handles_to_range(self, handles: HandlePositions) -> TimeRange {
        TimeRange::new(
            self.pixel_to_time(handles.start_px),
            self.pixel_to_time(handles.end_px),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn week_domain() -> Domain {
        Domain::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid"),
            Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).single().expect("valid"),
        )
    }

    #[test]
    fn zero_width_maps_to_origin() {
        let domain = week_domain();
        assert_eq!(time_to_position(domain.max, domain, 0.0), 0.0);
        assert_eq!(position_to_time(120.0, domain, 0.0), domain.min);
        assert_eq!(position_to_time(120.0, domain, f64::NAN), domain.min);
    }

    #[test]
    fn degenerate_domain_maps_to_min() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid");
        let domain = Domain::new(instant, instant);
        assert_eq!(time_to_position(instant, domain, 700.0), 0.0);
        assert_eq!(position_to_time(350.0, domain, 700.0), instant);
    }

    #[test]
    fn non_finite_pixel_maps_to_domain_min() {
        let domain = week_domain();
        assert_eq!(position_to_time(f64::NAN, domain, 700.0), domain.min);
        assert_eq!(position_to_time(f64::INFINITY, domain, 700.0), domain.min);
    }

    #[test]
    fn track_scale_projects_ranges_both_ways() {
        let domain = week_domain();
        let scale = TrackScale::new(domain, TrackGeometry::new(700.0));
        let handles = scale.range_to_handles(TimeRange::full(domain));
        assert_eq!(handles, HandlePositions::new(0.0, 700.0));
        assert_eq!(scale.handles_to_range(handles), TimeRange::full(domain));
    }
}
