use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Comment entity - a text response attached to exactly one post.
///
/// `post_id` is kept as the text the client referenced; whether it points at
/// an existing post is enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: String,
    pub content: String,
}

/// A validated comment that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub id: Uuid,
    pub post_id: String,
    pub content: String,
}

impl NewComment {
    pub fn new(post_id: &str, content: &str) -> Result<Self, DomainError> {
        let post_id = post_id.trim();
        let content = content.trim();

        if post_id.is_empty() || content.is_empty() {
            return Err(DomainError::Validation(
                "Post id and content cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            post_id: post_id.to_string(),
            content: content.to_string(),
        })
    }
}

impl From<NewComment> for Comment {
    fn from(comment: NewComment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            content: comment.content,
        }
    }
}
