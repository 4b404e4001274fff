//! The fixed timestamp wire format.
//!
//! Itinerary documents carry naive local wall-clock times written as
//! `YYYY-MM-DDTHH:MM:SS`: no zone, no fractional seconds. Only strings of
//! exactly that shape are timestamps; anything else is opaque content and is
//! never touched. The same format is used to re-emit rewritten values, so a
//! parse→format round trip is lossless.

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};

/// `strftime`-style format for parsing and emitting timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Years that fit the four-digit `%Y` field.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Parse a timestamp string.
///
/// Returns `None` for anything that is not exactly `YYYY-MM-DDTHH:MM:SS`
/// naming a real calendar date/time in years `0001..=9999`. A seconds field
/// of `60` is not a timestamp.
///
/// # Examples
///
/// ```
/// use itinerary_shift::timestamp::parse_timestamp;
///
/// assert!(parse_timestamp("2023-06-01T08:00:00").is_some());
/// assert!(parse_timestamp("2023-06-01T08:00:00Z").is_none());
/// assert!(parse_timestamp("2023-6-1T8:00:00").is_none());
/// assert!(parse_timestamp("2023-02-30T08:00:00").is_none());
/// ```
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if !has_timestamp_shape(s) {
        return None;
    }
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .ok()
        .filter(|dt| !is_leap_second(dt) && is_representable(dt))
}

/// Format a datetime in the fixed wire format. Sub-second precision is dropped.
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Add `offset` to `dt`, or `None` if the result cannot be written back in
/// the wire format.
pub fn shift(dt: NaiveDateTime, offset: TimeDelta) -> Option<NaiveDateTime> {
    dt.checked_add_signed(offset).filter(is_representable)
}

/// Move `dt` onto the calendar date of `base`, keeping its own time-of-day.
pub fn reanchor(dt: NaiveDateTime, base: NaiveDateTime) -> NaiveDateTime {
    NaiveDateTime::new(base.date(), dt.time())
}

/// Drop sub-second precision so offsets stay whole seconds.
pub fn truncate_to_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Whether `dt` can be written back in the wire format.
pub fn is_representable(dt: &NaiveDateTime) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&dt.year())
}

/// chrono parses `:60` as a leap second, stored as a nanosecond overflow.
fn is_leap_second(dt: &NaiveDateTime) -> bool {
    dt.nanosecond() >= 1_000_000_000
}

/// `DDDD-DD-DDTDD:DD:DD`, checked byte by byte. chrono alone would also accept
/// unpadded fields and signed years.
fn has_timestamp_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            10 => b == b'T',
            13 | 16 => b == b':',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_well_formed() {
        assert_eq!(
            parse_timestamp("2023-06-01T08:00:00"),
            Some(dt(2023, 6, 1, 8, 0, 0))
        );
    }

    #[test]
    fn test_parse_rejects_zone_and_fraction() {
        assert!(parse_timestamp("2023-06-01T08:00:00Z").is_none());
        assert!(parse_timestamp("2023-06-01T08:00:00+02:00").is_none());
        assert!(parse_timestamp("2023-06-01T08:00:00.123").is_none());
    }

    #[test]
    fn test_parse_rejects_date_only_and_space_separator() {
        assert!(parse_timestamp("2023-06-01").is_none());
        assert!(parse_timestamp("2023-06-01 08:00:00").is_none());
    }

    #[test]
    fn test_parse_rejects_unpadded_fields() {
        assert!(parse_timestamp("2023-6-01T08:00:00").is_none());
        assert!(parse_timestamp("2023-06-01T8:00:000").is_none());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_timestamp("2023-02-29T08:00:00").is_none());
        assert!(parse_timestamp("2023-13-01T08:00:00").is_none());
        assert!(parse_timestamp("2023-06-01T24:00:00").is_none());
        assert!(parse_timestamp("0000-01-01T00:00:00").is_none());
    }

    #[test]
    fn test_parse_rejects_leap_second() {
        assert!(parse_timestamp("2023-06-01T08:00:60").is_none());
        assert!(parse_timestamp("2016-12-31T23:59:60").is_none());
    }

    #[test]
    fn test_parse_rejects_seconds_above_sixty() {
        assert!(parse_timestamp("2023-06-01T08:00:61").is_none());
    }

    #[test]
    fn test_representable_years() {
        assert!(is_representable(&dt(1, 1, 1, 0, 0, 0)));
        assert!(is_representable(&dt(9999, 12, 31, 23, 59, 59)));
        assert!(!is_representable(&dt(12000, 3, 10, 9, 0, 0)));
    }

    #[test]
    fn test_parse_leap_day() {
        assert_eq!(
            parse_timestamp("2024-02-29T23:59:59"),
            Some(dt(2024, 2, 29, 23, 59, 59))
        );
    }

    #[test]
    fn test_format_round_trip() {
        let s = "1999-12-31T23:59:59";
        assert_eq!(format_timestamp(&parse_timestamp(s).unwrap()), s);
    }

    #[test]
    fn test_format_drops_nanoseconds() {
        let with_nanos = dt(2023, 6, 1, 8, 0, 0) + TimeDelta::milliseconds(750);
        assert_eq!(format_timestamp(&with_nanos), "2023-06-01T08:00:00");
    }

    #[test]
    fn test_shift_across_month_end() {
        let shifted = shift(dt(2023, 1, 31, 22, 0, 0), TimeDelta::hours(3)).unwrap();
        assert_eq!(shifted, dt(2023, 2, 1, 1, 0, 0));
    }

    #[test]
    fn test_shift_past_year_9999_is_none() {
        assert!(shift(dt(9999, 12, 31, 23, 59, 59), TimeDelta::seconds(1)).is_none());
    }

    #[test]
    fn test_shift_before_year_1_is_none() {
        assert!(shift(dt(1, 1, 1, 0, 0, 0), TimeDelta::seconds(-1)).is_none());
    }

    #[test]
    fn test_reanchor_keeps_time_of_day() {
        let moved = reanchor(dt(2023, 1, 5, 6, 45, 10), dt(2024, 3, 10, 9, 0, 0));
        assert_eq!(moved, dt(2024, 3, 10, 6, 45, 10));
    }

    #[test]
    fn test_truncate_to_seconds() {
        let with_nanos = dt(2023, 6, 1, 8, 0, 0) + TimeDelta::nanoseconds(42);
        assert_eq!(truncate_to_seconds(with_nanos), dt(2023, 6, 1, 8, 0, 0));
    }
}
