//! JSON text in and out.
//!
//! The rewrite itself works on parsed values; these helpers sit at the edge
//! so malformed text is rejected before the core ever runs.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::{Result, ShiftError};

/// Parse JSON text into a value, preserving object key order.
///
/// # Errors
///
/// Returns [`ShiftError::InvalidJson`] if `text` is not valid JSON.
pub fn parse_document(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| ShiftError::InvalidJson(e.to_string()))
}

/// Serialize with four-space indentation.
pub fn to_pretty_json(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut ser)
        .map_err(|e| ShiftError::Serialization(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ShiftError::Serialization(e.to_string()))
}

/// Serialize on a single line.
pub fn to_compact_json(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|e| ShiftError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_key_order() {
        let value = parse_document(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        let err = parse_document(r#"{"route": ["#).unwrap_err();
        assert!(matches!(err, ShiftError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_rejects_empty_text() {
        assert!(matches!(
            parse_document("   "),
            Err(ShiftError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_pretty_uses_four_spaces() {
        let value = parse_document(r#"{"a": [1]}"#).unwrap();
        assert_eq!(
            to_pretty_json(&value).unwrap(),
            "{\n    \"a\": [\n        1\n    ]\n}"
        );
    }

    #[test]
    fn test_compact_keeps_order() {
        let value = parse_document(r#"{"b": true, "a": null}"#).unwrap();
        assert_eq!(to_compact_json(&value).unwrap(), r#"{"b":true,"a":null}"#);
    }
}
