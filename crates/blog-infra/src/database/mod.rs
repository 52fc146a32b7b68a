//! Database connection management, the store adapter and repositories.

mod comment_repo;
mod connections;
mod post_repo;
mod schema;
mod store;

pub use comment_repo::SqlCommentRepository;
pub use connections::{DatabaseConfig, connect, connect_in_memory};
pub use post_repo::SqlPostRepository;
pub use schema::ensure_schema;
pub use store::SqlStore;
