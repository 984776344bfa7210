use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::core::types::TimeRange;
use crate::error::{TimelineError, TimelineResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Text entered in the date/time fields of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomRangeFields<'a> {
    pub start_date: &'a str,
    pub start_time: Option<&'a str>,
    pub end_date: &'a str,
    pub end_time: Option<&'a str>,
}

impl<'a> CustomRangeFields<'a> {
    #[must_use]
    pub fn dates(start_date: &'a str, end_date: &'a str) -> Self {
        Self {
            start_date,
            start_time: None,
            end_date,
            end_time: None,
        }
    }

    #[must_use]
    pub fn with_times(mut self, start_time: &'a str, end_time: &'a str) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }
}

/// Builds a selection from `YYYY-MM-DD` dates and optional `HH:MM` times
/// interpreted at `offset`.
///
/// A missing or blank start time means `00:00`, a missing end time `23:59`.
/// Reversed input is ordered rather than rejected.
pub fn parse_custom_range(
    fields: CustomRangeFields<'_>,
    offset: FixedOffset,
) -> TimelineResult<TimeRange> {
    let start = parse_local(fields.start_date, fields.start_time, "00:00", offset)?;
    let end = parse_local(fields.end_date, fields.end_time, "23:59", offset)?;
    Ok(TimeRange::new(start, end))
}

fn parse_local(
    date: &str,
    time: Option<&str>,
    default_time: &str,
    offset: FixedOffset,
) -> TimelineResult<chrono::DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|err| {
        TimelineError::InvalidInput(format!("date `{date}` is not YYYY-MM-DD: {err}"))
    })?;

    let time_text = time
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default_time);
    let time = NaiveTime::parse_from_str(time_text, TIME_FORMAT).map_err(|err| {
        TimelineError::InvalidInput(format!("time `{time_text}` is not HH:MM: {err}"))
    })?;

    offset
        .from_local_datetime(&NaiveDateTime::new(date, time))
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| {
            TimelineError::InvalidInput(format!("{date} {time} is not representable at {offset}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).expect("utc offset")
    }

    #[test]
    fn missing_times_cover_whole_days() {
        let range = parse_custom_range(CustomRangeFields::dates("2024-03-09", "2024-03-10"), utc())
            .expect("valid dates");
        assert_eq!(range.start.to_rfc3339(), "2024-03-09T00:00:00+00:00");
        assert_eq!(range.end.to_rfc3339(), "2024-03-10T23:59:00+00:00");
    }

    #[test]
    fn offset_is_applied_before_converting_to_utc() {
        let cet = FixedOffset::east_opt(3600).expect("cet");
        let range = parse_custom_range(
            CustomRangeFields::dates("2024-03-09", "2024-03-09").with_times("10:00", "12:30"),
            cet,
        )
        .expect("valid input");
        assert_eq!(range.start.to_rfc3339(), "2024-03-09T09:00:00+00:00");
        assert_eq!(range.end.to_rfc3339(), "2024-03-09T11:30:00+00:00");
    }

    #[test]
    fn malformed_fields_are_rejected() {
        let err = parse_custom_range(CustomRangeFields::dates("09.03.2024", "2024-03-10"), utc())
            .expect_err("german date format is not accepted");
        assert!(matches!(err, TimelineError::InvalidInput(_)));

        let err = parse_custom_range(
            CustomRangeFields::dates("2024-03-09", "2024-03-10").with_times("25:00", ""),
            utc(),
        )
        .expect_err("hour out of range");
        assert!(matches!(err, TimelineError::InvalidInput(_)));
    }

    #[test]
    fn reversed_dates_are_ordered() {
        let range = parse_custom_range(CustomRangeFields::dates("2024-03-10", "2024-03-01"), utc())
            .expect("valid dates");
        assert!(range.start < range.end);
    }
}
