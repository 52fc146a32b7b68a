//! Standardized API error body.

use serde::{Deserialize, Serialize};

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The HTTP status code, repeated in the body.
    pub status_code: u16,
    /// A human-readable explanation of this occurrence.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }
}
