//! Non-fatal diagnostics collected while rewriting a document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pointer::describe;

/// Something the caller should know about, reported alongside the
/// rewritten document rather than aborting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The departure time could not be located; `substituted` was used as
    /// the anchor instead.
    AnchorNotFound { reason: String, substituted: String },

    /// Shifting the timestamp at `path` would leave the representable date
    /// range; the original value was kept.
    DateOverflow { path: String, value: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AnchorNotFound {
                reason,
                substituted,
            } => write!(
                f,
                "departure time not found ({reason}); using {substituted} as the anchor"
            ),
            Notice::DateOverflow { path, value } => write!(
                f,
                "'{value}' at {} cannot be shifted without leaving the supported date range; left unchanged",
                describe(path)
            ),
        }
    }
}
