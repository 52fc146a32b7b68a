//! Post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::NewPost;
use blog_core::{DomainError, RepoError};
use blog_shared::dto::CreatePostRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_post = NewPost::new(
        req.title.as_deref().unwrap_or_default(),
        req.content.as_deref().unwrap_or_default(),
    )?;

    let post = state
        .posts
        .create(new_post)
        .await
        .map_err(|e| AppError::from(e).context("Unable to create new post"))?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(post))
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .list_all()
        .await
        .map_err(|e| AppError::from(e).context("Error reading all posts"))?;

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /posts/{post_id}/publish
///
/// Publishing is one-way: a post that already has `published_on` is refused
/// with 409 rather than re-stamped, including when two requests race.
pub async fn publish_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id = Uuid::parse_str(raw_id.trim())
        .map_err(|_| AppError::NotFound(format!("Post {raw_id} not found")))?;

    let mut post = match state.posts.find_by_id(id).await {
        Ok(post) => post,
        Err(RepoError::NotFound) => {
            return Err(DomainError::NotFound {
                entity_type: "post",
                id,
            }
            .into());
        }
        Err(e) => return Err(AppError::from(e).context("Unable to load post")),
    };

    let published = state
        .posts
        .publish_draft(&mut post)
        .await
        .map_err(|e| AppError::from(e).context("Unable to publish post"))?;
    if !published {
        return Err(DomainError::AlreadyPublished(id).into());
    }

    tracing::info!(post_id = %post.id, "Post published");
    Ok(HttpResponse::Ok().json(post))
}
