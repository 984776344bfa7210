use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_unix_millis;

/// Selectable universe of the timeline, derived by the host from loaded data.
///
/// Fields are public for ergonomic construction; every consumer tolerates an
/// inverted or empty domain and degrades to a no-op mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub min: DateTime<Utc>,
    pub max: DateTime<Utc>,
}

impl Domain {
    /// Creates a domain from two bounds, ordering them.
    #[must_use]
    pub fn new(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Derives the domain spanned by a set of record timestamps.
    ///
    /// Returns `None` for empty input.
    pub fn from_instants<I>(instants: I) -> Option<Self>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        instants.into_iter().fold(None, |acc, instant| match acc {
            None => Some(Self {
                min: instant,
                max: instant,
            }),
            Some(domain) => Some(Self {
                min: domain.min.min(instant),
                max: domain.max.max(instant),
            }),
        })
    }

    #[must_use]
    pub fn span(self) -> TimeDelta {
        TimeDelta::milliseconds(self.span_millis())
    }

    /// Domain span in milliseconds; `0` for inverted domains.
    #[must_use]
    pub fn span_millis(self) -> i64 {
        (datetime_to_unix_millis(self.max) - datetime_to_unix_millis(self.min)).max(0)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max <= self.min
    }

    /// Clamps an instant into the domain without panicking on inverted bounds.
    #[must_use]
    pub fn clamp(self, instant: DateTime<Utc>) -> DateTime<Utc> {
        instant.min(self.max).max(self.min)
    }

    #[must_use]
    pub fn contains(self, instant: DateTime<Utc>) -> bool {
        instant >= self.min && instant <= self.max
    }
}

/// Host-owned, authoritative selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a range from two instants, ordering them.
    #[must_use]
    pub fn new(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub fn span(self) -> TimeDelta {
        TimeDelta::milliseconds(
            (datetime_to_unix_millis(self.end) - datetime_to_unix_millis(self.start)).max(0),
        )
    }

    /// Inclusive on both ends, matching how hosts filter their datasets.
    #[must_use]
    pub fn contains(self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Clamps both bounds into `domain` and restores `start <= end`.
    #[must_use]
    pub fn clamped_to(self, domain: Domain) -> Self {
        Self::new(domain.clamp(self.start), domain.clamp(self.end))
    }

    /// Returns the whole domain as a selection.
    #[must_use]
    pub fn full(domain: Domain) -> Self {
        Self::new(domain.min, domain.max)
    }
}

/// Rendered pixel width of the timeline track.
///
/// Zero until the host observes the first layout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub width_px: f64,
}

impl TrackGeometry {
    /// Non-finite and negative widths are stored as `0`.
    #[must_use]
    pub fn new(width_px: f64) -> Self {
        let width_px = if width_px.is_finite() && width_px > 0.0 {
            width_px
        } else {
            0.0
        };
        Self { width_px }
    }

    #[must_use]
    pub fn is_laid_out(self) -> bool {
        self.width_px > 0.0
    }
}

/// Local pixel mirror of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HandlePositions {
    pub start_px: f64,
    pub end_px: f64,
}

impl HandlePositions {
    #[must_use]
    pub fn new(start_px: f64, end_px: f64) -> Self {
        Self { start_px, end_px }
    }

    #[must_use]
    pub fn span_px(self) -> f64 {
        self.end_px - self.start_px
    }

    /// Restores the minimum visual separation between handles.
    ///
    /// The start handle is moved left when the pair hugs the right edge. On a
    /// track narrower than `min_gap_px` the pair spans the whole track.
    #[must_use]
    pub fn with_min_gap(self, width_px: f64, min_gap_px: f64) -> Self {
        if self.end_px - self.start_px >= min_gap_px {
            return self;
        }
        if width_px <= min_gap_px {
            return Self::new(0.0, width_px.max(0.0));
        }

        let end_px = (self.start_px + min_gap_px).min(width_px);
        Self::new(end_px - min_gap_px, end_px)
    }
}
