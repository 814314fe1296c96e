//! Error types for interview-match operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid time: {0} (expected H:MM or HH:MM)")]
    InvalidTime(String),

    #[error("Invalid range on {day}: {start} is not before {end}")]
    InvalidRange {
        day: String,
        start: String,
        end: String,
    },

    #[error("Non-canonical slot time: {time} (write it as {canonical})")]
    NonCanonicalTime { time: String, canonical: String },

    #[error("Invalid day: {0} (expected monday through friday)")]
    InvalidDay(String),

    #[error("Invalid slot configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown {kind}: {id}")]
    UnknownPerson { kind: &'static str, id: String },

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Slot unavailable: {0}")]
    SlotUnavailable(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
