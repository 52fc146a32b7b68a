//! Application state - the repositories every handler is given.

use std::sync::Arc;

use blog_core::ports::{CommentRepository, PostRepository};
use blog_infra::{DbConn, SqlCommentRepository, SqlPostRepository};

/// Shared application state.
///
/// Holds no mutable data of its own; everything lives in the store.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl AppState {
    /// Build the repositories over one connection pool.
    pub fn new(db: DbConn) -> Self {
        tracing::info!("Application state initialized");

        Self {
            posts: Arc::new(SqlPostRepository::new(db.clone())),
            comments: Arc::new(SqlCommentRepository::new(db)),
        }
    }

    /// State backed by a fresh in-memory SQLite database.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let db = blog_infra::connect_in_memory()
            .await
            .expect("in-memory database");
        Self::new(db)
    }
}
