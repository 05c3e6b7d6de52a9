//! Error types for the availability editor
//!
//! Every rejection an editor can produce is listed here. Apart from a malformed
//! initial payload, which degrades to an empty editor, all of them are local
//! and silent for the end user: the gesture simply has no visible effect.

use chrono::NaiveDateTime;
use slotgrid_types::{PayloadError, SlotId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error("Invalid range: {start} is not before {end}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("Range {start} .. {end} overlaps slot {existing}")]
    OverlapConflict {
        start: NaiveDateTime,
        end: NaiveDateTime,
        existing: SlotId,
    },
    #[error("Slot not found: {0}")]
    NotFound(SlotId),
    #[error("Editor is read-only")]
    ReadOnly,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<PayloadError> for EditorError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::Serialization { message } => EditorError::SerializationError(message),
            other => EditorError::MalformedPayload(other.to_string()),
        }
    }
}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        EditorError::IoError(err.to_string())
    }
}
