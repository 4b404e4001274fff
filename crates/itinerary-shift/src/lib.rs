//! # itinerary-shift
//!
//! Replay a captured travel itinerary as if it started at a new date/time.
//!
//! A JSON itinerary carries its own departure time at a fixed location. The
//! engine resolves that anchor, computes one offset to the chosen base
//! date/time, and rewrites every `YYYY-MM-DDTHH:MM:SS` string in the
//! document by that offset. Everything else in the document is preserved
//! verbatim, key order included.
//!
//! ## Modules
//!
//! - [`anchor`] — Locate the itinerary's departure time
//! - [`offset`] — Derive the single global delta from base and anchor
//! - [`rewrite`] — Walk the value tree and shift or re-anchor timestamps
//! - [`timestamp`] — The fixed timestamp wire format
//! - [`notice`] — Non-fatal diagnostics emitted during a rewrite
//! - [`document`] — JSON text in and out
//! - [`pointer`] — JSON Pointer paths for diagnostics
//! - [`error`] — Error types

pub mod anchor;
pub mod document;
pub mod error;
pub mod notice;
pub mod offset;
pub mod pointer;
pub mod rewrite;
pub mod timestamp;

pub use anchor::{resolve_anchor, AnchorError};
pub use document::{parse_document, to_compact_json, to_pretty_json};
pub use error::ShiftError;
pub use notice::Notice;
pub use offset::{compute_offset, describe_offset};
pub use rewrite::{
    rewrite, rewrite_with_options, MissingAnchorPolicy, Rewrite, RewriteOptions, REANCHOR_KEY,
};
pub use timestamp::{format_timestamp, parse_timestamp, TIMESTAMP_FORMAT};
