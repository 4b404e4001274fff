//! The single global delta applied to every timestamp in a document.

use chrono::{NaiveDateTime, TimeDelta};

/// Compute the offset that moves `anchor` onto `base`.
///
/// Without a base the offset is zero and the rewrite is an identity on
/// timestamp values. The result may be negative and has no magnitude limit.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeDelta};
/// use itinerary_shift::offset::compute_offset;
///
/// let anchor = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let base = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// assert_eq!(compute_offset(Some(base), anchor), TimeDelta::days(30));
/// assert_eq!(compute_offset(None, anchor), TimeDelta::zero());
/// ```
pub fn compute_offset(base: Option<NaiveDateTime>, anchor: NaiveDateTime) -> TimeDelta {
    base.map_or_else(TimeDelta::zero, |base| base - anchor)
}

/// Human-readable signed offset, e.g. `"+30 days, 2 hours"` or `"-45 minutes"`.
pub fn describe_offset(offset: &TimeDelta) -> String {
    let total_seconds = offset.num_seconds();
    let sign = if total_seconds < 0 { "-" } else { "+" };
    let abs_seconds = total_seconds.unsigned_abs();

    let days = abs_seconds / 86400;
    let remainder = abs_seconds % 86400;
    let hours = remainder / 3600;
    let remainder = remainder % 3600;
    let minutes = remainder / 60;
    let seconds = remainder % 60;

    let mut parts = Vec::new();
    for (n, unit) in [(days, "day"), (hours, "hour"), (minutes, "minute")] {
        if n > 0 {
            parts.push(format!("{} {}{}", n, unit, if n == 1 { "" } else { "s" }));
        }
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!(
            "{} second{}",
            seconds,
            if seconds == 1 { "" } else { "s" }
        ));
    }
    format!("{sign}{}", parts.join(", "))
}
