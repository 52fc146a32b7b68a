//! Data Transfer Objects - request bodies accepted by the API.
//!
//! Fields are optional so that a missing or `null` field decodes cleanly and
//! is rejected by validation with a 400, the same as an empty one.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of `POST /posts/comments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
