//! Comment handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::NewComment;
use blog_shared::dto::CreateCommentRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /posts/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_comment = NewComment::new(
        req.post_id.as_deref().unwrap_or_default(),
        req.content.as_deref().unwrap_or_default(),
    )?;

    let comment = state
        .comments
        .create(new_comment)
        .await
        .map_err(|e| AppError::from(e).context("err creating comment"))?;

    tracing::info!(comment_id = %comment.id, post_id = %comment.post_id, "Comment created");
    Ok(HttpResponse::Created().json(comment))
}

/// GET /posts/{post_id}/comments
///
/// An unknown post yields an empty list, same as a post without comments.
pub async fn list_post_comments(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let comments = state
        .comments
        .list_by_post(&post_id)
        .await
        .map_err(|e| AppError::from(e).context("Error reading comments"))?;

    Ok(HttpResponse::Ok().json(comments))
}
