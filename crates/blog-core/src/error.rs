//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("{0}")]
    Validation(String),

    #[error("Post {0} is already published")]
    AlreadyPublished(Uuid),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
