use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, NewComment, NewPost, Post};
use crate::error::RepoError;

/// Post repository - the lifecycle operations of a post.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post. The store assigns `created_on`.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Stamp `published_on` with the current UTC time and persist it.
    ///
    /// Not idempotent: a second call replaces the timestamp.
    async fn publish(&self, post: &mut Post) -> Result<(), RepoError>;

    /// Publish only if the stored post has no `published_on` yet.
    ///
    /// Returns `false`, leaving the stored timestamp untouched, when the post
    /// was already published. The check and the update are one statement.
    async fn publish_draft(&self, post: &mut Post) -> Result<bool, RepoError>;

    /// Find a post by its id, failing with [`RepoError::NotFound`].
    async fn find_by_id(&self, id: Uuid) -> Result<Post, RepoError>;

    /// All posts, in whatever order the store returns them.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a new comment. A `post_id` with no matching post fails in the store.
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError>;

    /// Comments attached to `post_id`; empty when there are none or the post is unknown.
    async fn list_by_post(&self, post_id: &str) -> Result<Vec<Comment>, RepoError>;
}
