use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{Domain, TimeRange};
use crate::error::TimelineError;

/// Named relative windows anchored at the newest data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuickRange {
    #[serde(rename = "min5")]
    Minutes5,
    #[serde(rename = "min15")]
    Minutes15,
    #[serde(rename = "hour1")]
    Hours1,
    #[serde(rename = "hour4")]
    Hours4,
    #[serde(rename = "hour8")]
    Hours8,
    #[serde(rename = "hour12")]
    Hours12,
    #[serde(rename = "hour16")]
    Hours16,
    #[serde(rename = "lastDay")]
    Days1,
    #[serde(rename = "lastWeek")]
    Days7,
    #[serde(rename = "twoWeeks")]
    Days14,
    #[serde(rename = "lastMonth")]
    Days30,
}

impl QuickRange {
    pub const ALL: [Self; 11] = [
        Self::Minutes5,
        Self::Minutes15,
        Self::Hours1,
        Self::Hours4,
        Self::Hours8,
        Self::Hours12,
        Self::Hours16,
        Self::Days1,
        Self::Days7,
        Self::Days14,
        Self::Days30,
    ];

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        match self {
            Self::Minutes5 => TimeDelta::minutes(5),
            Self::Minutes15 => TimeDelta::minutes(15),
            Self::Hours1 => TimeDelta::hours(1),
            Self::Hours4 => TimeDelta::hours(4),
            Self::Hours8 => TimeDelta::hours(8),
            Self::Hours12 => TimeDelta::hours(12),
            Self::Hours16 => TimeDelta::hours(16),
            Self::Days1 => TimeDelta::days(1),
            Self::Days7 => TimeDelta::days(7),
            Self::Days14 => TimeDelta::days(14),
            Self::Days30 => TimeDelta::days(30),
        }
    }

    /// Stable identifier used by hosts to persist the active button.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Minutes5 => "min5",
            Self::Minutes15 => "min15",
            Self::Hours1 => "hour1",
            Self::Hours4 => "hour4",
            Self::Hours8 => "hour8",
            Self::Hours12 => "hour12",
            Self::Hours16 => "hour16",
            Self::Days1 => "lastDay",
            Self::Days7 => "lastWeek",
            Self::Days14 => "twoWeeks",
            Self::Days30 => "lastMonth",
        }
    }

    /// Short button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Minutes5 => "5 Min",
            Self::Minutes15 => "15 Min",
            Self::Hours1 => "1 Std",
            Self::Hours4 => "4 Std",
            Self::Hours8 => "8 Std",
            Self::Hours12 => "12 Std",
            Self::Hours16 => "16 Std",
            Self::Days1 => "24 Std",
            Self::Days7 => "7 Tage",
            Self::Days14 => "14 Tage",
            Self::Days30 => "30 Tage",
        }
    }
}

impl fmt::Display for QuickRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for QuickRange {
    type Err = TimelineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == value)
            .ok_or_else(|| TimelineError::UnknownQuickRange(value.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftDirection {
    Backward,
    Forward,
}

/// Window of `kind` ending at `domain.max`, with the start clamped to `domain.min`.
#[must_use]
pub fn compute_relative_range(kind: QuickRange, domain: Domain) -> TimeRange {
    let end = domain.max;
    let start = end
        .checked_sub_signed(kind.duration())
        .unwrap_or(domain.min);
    TimeRange::new(domain.clamp(start), end.max(domain.min))
}

/// Moves the selection by exactly its own span.
///
/// A shift that would leave the domain is pinned to the violated edge with the
/// span kept intact. A selection wider than the domain becomes the whole domain.
#[must_use]
pub fn shift_range(range: TimeRange, direction: ShiftDirection, domain: Domain) -> TimeRange {
    let range = range.clamped_to(domain);
    let span = range.span();
    if span >= domain.span() {
        return TimeRange::full(domain);
    }

    match direction {
        ShiftDirection::Forward => {
            let end = offset_or(range.end, span, domain.max);
            if end > domain.max {
                TimeRange::new(offset_or(domain.max, -span, domain.min), domain.max)
            } else {
                TimeRange::new(offset_or(range.start, span, domain.max), end)
            }
        }
        ShiftDirection::Backward => {
            let start = offset_or(range.start, -span, domain.min);
            if start < domain.min {
                TimeRange::new(domain.min, offset_or(domain.min, span, domain.max))
            } else {
                TimeRange::new(start, offset_or(range.end, -span, domain.min))
            }
        }
    }
}

fn offset_or(instant: DateTime<Utc>, delta: TimeDelta, fallback: DateTime<Utc>) -> DateTime<Utc> {
    instant.checked_add_signed(delta).unwrap_or(fallback)
}

/// Summarizes a span for the panel header, e.g. `"1 Tag 2 Std. 5 Min."`.
///
/// Minutes are always shown when the span is shorter than an hour.
#[must_use]
pub fn describe_span(span: TimeDelta) -> String {
    let total_minutes = span.num_minutes().max(0);
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes % (24 * 60)) / 60;
    let minutes = total_minutes % 60;

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(format!("{days} {}", if days == 1 { "Tag" } else { "Tage" }));
    }
    if hours > 0 {
        parts.push(format!("{hours} Std."));
    }
    if minutes > 0 || (days == 0 && hours == 0) {
        parts.push(format!("{minutes} Min."));
    }
    parts.join(" ")
}
