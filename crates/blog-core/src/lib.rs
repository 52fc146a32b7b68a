//! # Blog Core
//!
//! The domain layer of the blog backend.
//! Posts, comments, the rules for accepting new ones, and the repository
//! ports that persistence adapters implement. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
