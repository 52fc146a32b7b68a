use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a blog article with an optional publication timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Absent until the post is published.
    pub published_on: Option<DateTime<Utc>>,
    /// Assigned by the store on insert.
    pub created_on: DateTime<Utc>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.published_on.is_some()
    }

    /// Stamp the post as published at the current UTC time.
    ///
    /// Overwrites any previous timestamp; callers that must keep the first
    /// publication date check [`Post::is_published`] first.
    pub fn publish(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        self.published_on = Some(now);
        now
    }
}

/// A validated post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

impl NewPost {
    /// Trim both fields and reject the post if either ends up empty.
    pub fn new(title: &str, content: &str) -> Result<Self, DomainError> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() || content.is_empty() {
            return Err(DomainError::Validation(
                "Title and content must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    /// Combine with the store-assigned creation time into a full record.
    pub fn into_post(self, created_on: DateTime<Utc>) -> Post {
        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            published_on: None,
            created_on,
        }
    }
}
