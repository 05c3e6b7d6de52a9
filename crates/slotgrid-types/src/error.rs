//! Error types for payload encoding and decoding.

use thiserror::Error;

/// Errors that can occur while reading or writing the transport payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayloadError {
    /// The payload is not valid structured data or violates the slot format.
    #[error("Malformed payload: {message}")]
    Malformed { message: String },

    /// A timestamp could not be parsed.
    #[error("Invalid timestamp '{value}'")]
    InvalidTimestamp { value: String },

    /// A serialization error occurred.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl PayloadError {
    /// Create a new malformed payload error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Create a new invalid timestamp error.
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
        }
    }

    /// Create a new serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Result type for payload operations.
pub type PayloadResult<T> = Result<T, PayloadError>;
