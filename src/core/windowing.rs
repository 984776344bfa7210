use chrono::{DateTime, Utc};

use crate::core::TimeRange;

/// Returns records whose timestamp falls inside the inclusive selection.
///
/// This is the filter dashboards apply to each dataset after the selection
/// changes: `start <= timestamp <= end`.
#[must_use]
pub fn records_in_range<T, F>(records: &[T], range: TimeRange, timestamp_of: F) -> Vec<&T>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    records
        .iter()
        .filter(|record| range.contains(timestamp_of(record)))
        .collect()
}

/// Returns instants inside the inclusive selection.
#[must_use]
pub fn instants_in_range(instants: &[DateTime<Utc>], range: TimeRange) -> Vec<DateTime<Utc>> {
    instants
        .iter()
        .copied()
        .filter(|instant| range.contains(*instant))
        .collect()
}
