//! Turn the base-time flags into a concrete datetime.

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::cli::BaseArgs;

/// Current wall-clock time in `tz`, to whole seconds.
pub fn now_in(tz: &Tz) -> NaiveDateTime {
    itinerary_shift::timestamp::truncate_to_seconds(Utc::now().with_timezone(tz).naive_local())
}

/// The requested base, filling a missing date or time from `now`.
///
/// With no base flag at all the itinerary departs `now`.
pub fn resolve(args: &BaseArgs, now: NaiveDateTime) -> NaiveDateTime {
    args.base.unwrap_or_else(|| {
        NaiveDateTime::new(
            args.date.unwrap_or(now.date()),
            args.time.unwrap_or(now.time()),
        )
    })
}
