use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Converts an instant to whole Unix milliseconds.
#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Converts Unix milliseconds to an instant, saturating at chrono's
/// representable bounds instead of failing.
#[must_use]
pub fn unix_millis_to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Resolves a fixed UTC offset from minutes east of UTC.
///
/// Out-of-range offsets fall back to UTC; config validation rejects them
/// earlier, this only keeps formatting total.
#[must_use]
pub fn fixed_offset_from_minutes(utc_offset_minutes: i32) -> FixedOffset {
    utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

/// Returns `value` clamped to `[min, max]`; non-finite values collapse to `min`.
///
/// Unlike `f64::clamp` this never panics when `max < min`, it returns `min`.
#[must_use]
pub fn clamp_px(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip_through_datetime() {
        let millis = 1_704_067_200_123;
        assert_eq!(datetime_to_unix_millis(unix_millis_to_datetime(millis)), millis);
    }

    #[test]
    fn out_of_range_millis_saturate() {
        assert_eq!(unix_millis_to_datetime(i64::MAX), DateTime::<Utc>::MAX_UTC);
        assert_eq!(unix_millis_to_datetime(i64::MIN), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn invalid_offset_falls_back_to_utc() {
        assert_eq!(fixed_offset_from_minutes(60).local_minus_utc(), 3600);
        assert_eq!(fixed_offset_from_minutes(48 * 60).local_minus_utc(), 0);
    }

    #[test]
    fn clamp_px_prefers_lower_bound_on_inverted_bounds() {
        assert_eq!(clamp_px(5.0, 10.0, 2.0), 10.0);
        assert_eq!(clamp_px(f64::NAN, 0.0, 100.0), 0.0);
        assert_eq!(clamp_px(150.0, 0.0, 100.0), 100.0);
    }
}
