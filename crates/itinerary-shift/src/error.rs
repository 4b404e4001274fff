//! Error types for itinerary-shift operations.

use thiserror::Error;

use crate::anchor::AnchorError;

#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Anchor not found: {0}")]
    AnchorNotFound(#[from] AnchorError),

    #[error("Base datetime out of range: {0} cannot be written as YYYY-MM-DDTHH:MM:SS")]
    BaseOutOfRange(String),

    #[error("Missing base datetime: departureDate at {0} can only be re-anchored onto a base date")]
    MissingBaseDatetime(String),
}

pub type Result<T> = std::result::Result<T, ShiftError>;
