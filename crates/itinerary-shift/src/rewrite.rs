//! Rewrite every timestamp in an itinerary document by one offset.
//!
//! The rewrite resolves the document's anchor, computes the offset to the
//! requested base date/time, then walks the whole value tree:
//!
//! - objects keep their keys in order, and each value is rewritten with its
//!   own key as context;
//! - arrays keep their length, and elements inherit the enclosing key;
//! - timestamp strings are shifted by the offset, except under
//!   [`REANCHOR_KEY`] where only the calendar date is replaced by the base's;
//! - every other value is copied as is.
//!
//! The input is borrowed and never mutated. Values that cannot be shifted
//! stay untouched and are reported as [`Notice`]s.

use chrono::{Local, NaiveDateTime, TimeDelta};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::anchor::resolve_anchor;
use crate::error::{Result, ShiftError};
use crate::notice::Notice;
use crate::offset::{compute_offset, describe_offset};
use crate::pointer::{describe, push_index, push_segment};
use crate::timestamp::{
    format_timestamp, is_representable, parse_timestamp, reanchor, shift, truncate_to_seconds,
};

/// Timestamps under this key are moved to the base date instead of shifted.
pub const REANCHOR_KEY: &str = "departureDate";

/// What to do when the document's departure time cannot be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingAnchorPolicy {
    /// Abort with [`ShiftError::AnchorNotFound`].
    Fail,
    /// Use the current local time as the anchor and report a notice.
    #[default]
    UseNow,
}

/// Options for [`rewrite_with_options`].
#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    /// Target date/time for the itinerary's departure. `None` leaves every
    /// shifted timestamp where it is.
    pub base: Option<NaiveDateTime>,
    /// Behavior when the anchor is missing.
    pub on_missing_anchor: MissingAnchorPolicy,
    /// The "now" substituted for a missing anchor. `None` reads the local clock.
    pub now: Option<NaiveDateTime>,
}

/// A rewritten document and what happened while producing it.
#[derive(Debug, Clone)]
pub struct Rewrite {
    /// The rewritten document.
    pub document: Value,
    /// The anchor the offset was computed from.
    pub anchor: NaiveDateTime,
    /// The offset applied to every shifted timestamp.
    pub offset: TimeDelta,
    /// Non-fatal diagnostics, in document order after any anchor notice.
    pub notices: Vec<Notice>,
}

/// Rewrite `document` so its departure lands on `base`.
///
/// A missing anchor is replaced by the current local time. For other
/// policies or an injected clock, use [`rewrite_with_options`].
///
/// # Errors
///
/// Returns [`ShiftError::MissingBaseDatetime`] if `base` is `None` and the
/// document has a `departureDate` timestamp.
///
/// # Examples
///
/// ```
/// use itinerary_shift::{parse_timestamp, rewrite};
/// use serde_json::json;
///
/// let doc = json!({
///     "route": [{"timingInfo": {"departureTime": {"notRounded": {
///         "commercialPlanned": {"actual": "2023-06-01T08:00:00"}
///     }}}}],
///     "note": "2023-06-01T10:00:00"
/// });
/// let result = rewrite(&doc, parse_timestamp("2023-07-01T08:00:00")).unwrap();
/// assert_eq!(result.document["note"], "2023-07-01T10:00:00");
/// assert!(result.notices.is_empty());
/// ```
pub fn rewrite(document: &Value, base: Option<NaiveDateTime>) -> Result<Rewrite> {
    rewrite_with_options(
        document,
        &RewriteOptions {
            base,
            ..Default::default()
        },
    )
}

/// Rewrite `document` with explicit options.
///
/// # Errors
///
/// Returns [`ShiftError::AnchorNotFound`] if the anchor is missing and the
/// policy is [`MissingAnchorPolicy::Fail`], or
/// [`ShiftError::MissingBaseDatetime`] if a `departureDate` timestamp is met
/// without a base, or [`ShiftError::BaseOutOfRange`] if the base year is
/// outside `0001..=9999`. No partial output is produced in any case.
pub fn rewrite_with_options(document: &Value, options: &RewriteOptions) -> Result<Rewrite> {
    let base = options.base.map(truncate_to_seconds);
    if let Some(base) = base.filter(|b| !is_representable(b)) {
        return Err(ShiftError::BaseOutOfRange(format_timestamp(&base)));
    }
    let mut notices = Vec::new();

    let anchor = match resolve_anchor(document) {
        Ok(anchor) => anchor,
        Err(err) => match options.on_missing_anchor {
            MissingAnchorPolicy::Fail => return Err(err.into()),
            MissingAnchorPolicy::UseNow => {
                let now = truncate_to_seconds(
                    options.now.unwrap_or_else(|| Local::now().naive_local()),
                );
                let notice = Notice::AnchorNotFound {
                    reason: err.to_string(),
                    substituted: format_timestamp(&now),
                };
                warn!("{notice}");
                notices.push(notice);
                now
            }
        },
    };

    let offset = compute_offset(base, anchor);
    debug!(
        "anchor {}, offset {}",
        format_timestamp(&anchor),
        describe_offset(&offset)
    );

    let mut rewriter = Rewriter {
        offset,
        base,
        notices,
    };
    let document = rewriter.value(document, None, &mut String::new())?;

    Ok(Rewrite {
        document,
        anchor,
        offset,
        notices: rewriter.notices,
    })
}

/// Traversal state: the fixed inputs plus notices gathered so far.
struct Rewriter {
    offset: TimeDelta,
    base: Option<NaiveDateTime>,
    notices: Vec<Notice>,
}

impl Rewriter {
    /// Rewrite `value`, found under `key` at pointer `path`.
    fn value(&mut self, value: &Value, key: Option<&str>, path: &mut String) -> Result<Value> {
        match value {
            Value::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (k, v) in map {
                    let len = path.len();
                    push_segment(path, k);
                    let rewritten = self.value(v, Some(k.as_str()), path);
                    path.truncate(len);
                    out.insert(k.clone(), rewritten?);
                }
                Ok(Value::Object(out))
            }
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let len = path.len();
                    push_index(path, i);
                    let rewritten = self.value(item, key, path);
                    path.truncate(len);
                    out.push(rewritten?);
                }
                Ok(Value::Array(out))
            }
            Value::String(s) => self.string(s, key, path).map(Value::String),
            Value::Null | Value::Bool(_) | Value::Number(_) => Ok(value.clone()),
        }
    }

    fn string(&mut self, s: &str, key: Option<&str>, path: &str) -> Result<String> {
        let Some(ts) = parse_timestamp(s) else {
            return Ok(s.to_owned());
        };

        if key == Some(REANCHOR_KEY) {
            let base = self
                .base
                .ok_or_else(|| ShiftError::MissingBaseDatetime(describe(path).into_owned()))?;
            return Ok(format_timestamp(&reanchor(ts, base)));
        }

        match shift(ts, self.offset) {
            Some(shifted) => Ok(format_timestamp(&shifted)),
            None => {
                let notice = Notice::DateOverflow {
                    path: path.to_owned(),
                    value: s.to_owned(),
                };
                warn!("{notice}");
                self.notices.push(notice);
                Ok(s.to_owned())
            }
        }
    }
}
