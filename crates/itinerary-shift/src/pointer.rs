//! JSON Pointer (RFC 6901) paths used to locate values in diagnostics.

use std::borrow::Cow;

/// Append one reference token to `path`, escaping `~` and `/`.
pub fn push_segment(path: &mut String, segment: &str) {
    path.push('/');
    for ch in segment.chars() {
        match ch {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            _ => path.push(ch),
        }
    }
}

/// Append an array index to `path`.
pub fn push_index(path: &mut String, index: usize) {
    path.push('/');
    path.push_str(&index.to_string());
}

/// Render a pointer for messages. The empty pointer names the whole document.
pub fn describe(path: &str) -> Cow<'_, str> {
    if path.is_empty() {
        Cow::Borrowed("the document root")
    } else {
        Cow::Owned(format!("'{path}'"))
    }
}
