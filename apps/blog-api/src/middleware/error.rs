//! Error handling - every failure becomes a `{status_code, message}` body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::{DomainError, RepoError};
use blog_shared::ErrorResponse;
use thiserror::Error;

/// Application-level error type, converted to a JSON response at the handler boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body could not be decoded.
    #[error("{0}")]
    Decode(String),

    /// A required field was missing or blank.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// Any store-layer failure. Never retried.
    #[error("{0}")]
    Persistence(String),
}

impl AppError {
    /// Prefix a persistence failure with what the handler was doing.
    pub fn context(self, context: &str) -> Self {
        match self {
            AppError::Persistence(msg) => AppError::Persistence(format!("{context}: {msg}")),
            other => other,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Decode(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        let error = match self {
            AppError::Decode(_) | AppError::Validation(_) => {
                tracing::warn!("Rejected request: {}", message);
                ErrorResponse::bad_request(message)
            }
            AppError::NotFound(_) => ErrorResponse::not_found(message),
            AppError::Conflict(_) => ErrorResponse::conflict(message),
            AppError::Persistence(_) => {
                tracing::error!("Persistence error: {}", message);
                ErrorResponse::internal_error(message)
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::AlreadyPublished(_) => AppError::Conflict(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            // Constraint violations (e.g. an unknown post_id) are not told apart
            // from other store failures.
            other => AppError::Persistence(other.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
