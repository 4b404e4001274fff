//! Locate the itinerary's own departure time.
//!
//! The anchor lives at a fixed path:
//!
//! ```text
//! route[0].timingInfo.departureTime.notRounded
//!     .commercialPlanned.actual   (preferred)
//!     .lastPlanned.actual         (when commercialPlanned or its actual is absent/null)
//! ```
//!
//! Every segment is optional in real captures, so resolution reports which
//! segment failed instead of panicking. Whether a failure aborts the rewrite
//! is decided by the caller (see [`crate::rewrite::MissingAnchorPolicy`]).

use chrono::NaiveDateTime;
use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::pointer::{describe, push_index, push_segment};
use crate::timestamp::parse_timestamp;

const ROUTE: &str = "route";
const TIMING_INFO: &str = "timingInfo";
const DEPARTURE_TIME: &str = "departureTime";
const NOT_ROUNDED: &str = "notRounded";
const COMMERCIAL_PLANNED: &str = "commercialPlanned";
const LAST_PLANNED: &str = "lastPlanned";
const ACTUAL: &str = "actual";

/// Why the anchor could not be resolved. Paths are JSON Pointers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnchorError {
    #[error("missing field at {}", describe(.0))]
    MissingField(String),

    #[error("{} is an empty array", describe(.0))]
    EmptyArray(String),

    #[error("{} is null", describe(.0))]
    Null(String),

    #[error("{} is not {expected}", describe(.path))]
    WrongType {
        path: String,
        expected: &'static str,
    },

    #[error("{} is not a timestamp: '{value}'", describe(.path))]
    Unparsable { path: String, value: String },
}

/// Resolve the document's departure time.
///
/// # Errors
///
/// Returns an [`AnchorError`] describing the first path segment that is
/// missing, null, of the wrong type, or not a timestamp.
///
/// # Examples
///
/// ```
/// use itinerary_shift::anchor::resolve_anchor;
/// use serde_json::json;
///
/// let doc = json!({"route": [{"timingInfo": {"departureTime": {"notRounded": {
///     "commercialPlanned": {"actual": "2023-06-01T08:00:00"}
/// }}}}]});
/// let anchor = resolve_anchor(&doc).unwrap();
/// assert_eq!(anchor.to_string(), "2023-06-01 08:00:00");
/// ```
pub fn resolve_anchor(document: &Value) -> Result<NaiveDateTime, AnchorError> {
    let not_rounded = Cursor::root(document)
        .field(ROUTE)?
        .first()?
        .field(TIMING_INFO)?
        .field(DEPARTURE_TIME)?
        .field(NOT_ROUNDED)?;

    let actual = match not_rounded
        .clone()
        .field(COMMERCIAL_PLANNED)
        .and_then(|planned| planned.field(ACTUAL))
    {
        Ok(actual) => actual,
        Err(AnchorError::MissingField(path) | AnchorError::Null(path)) => {
            debug!("no commercial departure at '{path}', falling back to {LAST_PLANNED}");
            not_rounded.field(LAST_PLANNED)?.field(ACTUAL)?
        }
        Err(e) => return Err(e),
    };

    let path = actual.path.clone();
    let anchor = actual.timestamp()?;
    debug!("resolved anchor {anchor} at '{path}'");
    Ok(anchor)
}

/// A position in the document plus the pointer that led there.
#[derive(Clone)]
struct Cursor<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Cursor<'a> {
    fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: String::new(),
        }
    }

    fn field(self, key: &str) -> Result<Self, AnchorError> {
        let Value::Object(map) = self.value else {
            return Err(AnchorError::WrongType {
                path: self.path,
                expected: "an object",
            });
        };
        let mut path = self.path;
        push_segment(&mut path, key);
        match map.get(key) {
            None => Err(AnchorError::MissingField(path)),
            Some(Value::Null) => Err(AnchorError::Null(path)),
            Some(value) => Ok(Self { value, path }),
        }
    }

    fn first(self) -> Result<Self, AnchorError> {
        let Value::Array(items) = self.value else {
            return Err(AnchorError::WrongType {
                path: self.path,
                expected: "an array",
            });
        };
        let Some(value) = items.first() else {
            return Err(AnchorError::EmptyArray(self.path));
        };
        let mut path = self.path;
        push_index(&mut path, 0);
        Ok(Self { value, path })
    }

    fn timestamp(self) -> Result<NaiveDateTime, AnchorError> {
        let Value::String(s) = self.value else {
            return Err(AnchorError::WrongType {
                path: self.path,
                expected: "a string",
            });
        };
        parse_timestamp(s).ok_or_else(|| AnchorError::Unparsable {
            path: self.path,
            value: s.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn itinerary(not_rounded: Value) -> Value {
        json!({
            "route": [
                {"timingInfo": {"departureTime": {"notRounded": not_rounded}}},
                {"timingInfo": {"departureTime": {"notRounded": {
                    "commercialPlanned": {"actual": "1999-01-01T00:00:00"}
                }}}}
            ]
        })
    }

    fn resolved(doc: &Value) -> String {
        crate::timestamp::format_timestamp(&resolve_anchor(doc).unwrap())
    }

    #[test]
    fn test_prefers_commercial_planned() {
        let doc = itinerary(json!({
            "commercialPlanned": {"actual": "2023-06-01T08:00:00"},
            "lastPlanned": {"actual": "2023-06-01T09:30:00"}
        }));
        assert_eq!(resolved(&doc), "2023-06-01T08:00:00");
    }

    #[test]
    fn test_falls_back_when_commercial_actual_is_null() {
        let doc = itinerary(json!({
            "commercialPlanned": {"actual": null},
            "lastPlanned": {"actual": "2023-06-01T09:30:00"}
        }));
        assert_eq!(resolved(&doc), "2023-06-01T09:30:00");
    }

    #[test]
    fn test_falls_back_when_commercial_planned_is_absent() {
        let doc = itinerary(json!({"lastPlanned": {"actual": "2023-06-01T09:30:00"}}));
        assert_eq!(resolved(&doc), "2023-06-01T09:30:00");
    }

    #[test]
    fn test_falls_back_when_commercial_planned_is_null() {
        let doc = itinerary(json!({
            "commercialPlanned": null,
            "lastPlanned": {"actual": "2023-06-01T09:30:00"}
        }));
        assert_eq!(resolved(&doc), "2023-06-01T09:30:00");
    }

    #[test]
    fn test_falls_back_when_commercial_actual_is_missing() {
        let doc = itinerary(json!({
            "commercialPlanned": {"estimated": "2023-06-01T08:05:00"},
            "lastPlanned": {"actual": "2023-06-01T09:30:00"}
        }));
        assert_eq!(resolved(&doc), "2023-06-01T09:30:00");
    }

    #[test]
    fn test_both_missing_reports_last_planned() {
        let doc = itinerary(json!({}));
        assert_eq!(
            resolve_anchor(&doc),
            Err(AnchorError::MissingField(
                "/route/0/timingInfo/departureTime/notRounded/lastPlanned".to_string()
            ))
        );
    }

    #[test]
    fn test_last_planned_actual_null() {
        let doc = itinerary(json!({"lastPlanned": {"actual": null}}));
        assert_eq!(
            resolve_anchor(&doc),
            Err(AnchorError::Null(
                "/route/0/timingInfo/departureTime/notRounded/lastPlanned/actual".to_string()
            ))
        );
    }

    #[test]
    fn test_missing_route() {
        let doc = json!({"note": "2023-06-01T10:00:00"});
        assert_eq!(
            resolve_anchor(&doc),
            Err(AnchorError::MissingField("/route".to_string()))
        );
    }

    #[test]
    fn test_empty_route() {
        let doc = json!({"route": []});
        assert_eq!(
            resolve_anchor(&doc),
            Err(AnchorError::EmptyArray("/route".to_string()))
        );
    }

    #[test]
    fn test_route_not_an_array() {
        let doc = json!({"route": {"timingInfo": {}}});
        let err = resolve_anchor(&doc).unwrap_err();
        assert_eq!(err.to_string(), "'/route' is not an array");
    }

    #[test]
    fn test_root_not_an_object() {
        let err = resolve_anchor(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.to_string(), "the document root is not an object");
    }

    #[test]
    fn test_actual_not_a_string() {
        let doc = itinerary(json!({"commercialPlanned": {"actual": 1685606400}}));
        assert!(matches!(
            resolve_anchor(&doc),
            Err(AnchorError::WrongType { expected: "a string", .. })
        ));
    }

    #[test]
    fn test_actual_not_a_timestamp_does_not_fall_back() {
        let doc = itinerary(json!({
            "commercialPlanned": {"actual": "soon"},
            "lastPlanned": {"actual": "2023-06-01T09:30:00"}
        }));
        let err = resolve_anchor(&doc).unwrap_err();
        assert!(matches!(err, AnchorError::Unparsable { ref value, .. } if value == "soon"));
    }

    #[test]
    fn test_leap_second_actual_is_unparsable() {
        let doc = itinerary(json!({"commercialPlanned": {"actual": "2023-06-01T08:00:60"}}));
        assert_eq!(
            resolve_anchor(&doc),
            Err(AnchorError::Unparsable {
                path: "/route/0/timingInfo/departureTime/notRounded/commercialPlanned/actual"
                    .to_string(),
                value: "2023-06-01T08:00:60".to_string(),
            })
        );
    }

    #[test]
    fn test_commercial_planned_wrong_type_does_not_fall_back() {
        let doc = itinerary(json!({
            "commercialPlanned": "2023-06-01T08:00:00",
            "lastPlanned": {"actual": "2023-06-01T09:30:00"}
        }));
        assert!(matches!(
            resolve_anchor(&doc),
            Err(AnchorError::WrongType { expected: "an object", .. })
        ));
    }
}
