//! SQL-backed post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DbConn, QueryResult};
use uuid::Uuid;

use blog_core::domain::{NewPost, Post};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::store::{SqlStore, get};

pub(crate) const INSERT_POST: &str =
    "INSERT INTO post (id, title, content) VALUES ($1, $2, $3) RETURNING created_on";

pub(crate) const PUBLISH_POST: &str = "UPDATE post SET published_on = $1 WHERE id = $2";

pub(crate) const PUBLISH_DRAFT: &str =
    "UPDATE post SET published_on = $1 WHERE id = $2 AND published_on IS NULL";

pub(crate) const SELECT_POST_BY_ID: &str =
    "SELECT id, title, content, published_on, created_on FROM post WHERE id = $1";

pub(crate) const SELECT_ALL_POSTS: &str =
    "SELECT id, title, content, published_on, created_on FROM post";

/// Post repository over the `post` table.
#[derive(Clone)]
pub struct SqlPostRepository {
    store: SqlStore,
}

impl SqlPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self {
            store: SqlStore::new(db),
        }
    }
}

fn post_from_row(row: &QueryResult) -> Result<Post, RepoError> {
    let id: String = get(row, "id")?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| RepoError::Query(format!("invalid post id {id:?}: {e}")))?;

    Ok(Post {
        id,
        title: get(row, "title")?,
        content: get(row, "content")?,
        published_on: get(row, "published_on")?,
        created_on: get(row, "created_on")?,
    })
}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let row = self
            .store
            .query_one(
                INSERT_POST,
                vec![
                    post.id.to_string().into(),
                    post.title.clone().into(),
                    post.content.clone().into(),
                ],
            )
            .await?;
        let created_on: DateTime<Utc> = get(&row, "created_on")?;

        tracing::debug!(post_id = %post.id, "Post inserted");
        Ok(post.into_post(created_on))
    }

    async fn publish(&self, post: &mut Post) -> Result<(), RepoError> {
        let published_on = post.publish();
        let affected = self
            .store
            .execute(
                PUBLISH_POST,
                vec![published_on.into(), post.id.to_string().into()],
            )
            .await?;

        if affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = %post.id, %published_on, "Post published");
        Ok(())
    }

    async fn publish_draft(&self, post: &mut Post) -> Result<bool, RepoError> {
        let previous = post.published_on;
        let published_on = post.publish();
        let affected = self
            .store
            .execute(
                PUBLISH_DRAFT,
                vec![published_on.into(), post.id.to_string().into()],
            )
            .await?;

        if affected == 0 {
            post.published_on = previous;
            return Ok(false);
        }

        tracing::debug!(post_id = %post.id, %published_on, "Draft published");
        Ok(true)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Post, RepoError> {
        let row = self
            .store
            .query_one(SELECT_POST_BY_ID, vec![id.to_string().into()])
            .await?;

        post_from_row(&row)
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = self.store.query_many(SELECT_ALL_POSTS, vec![]).await?;
        rows.iter().map(post_from_row).collect()
    }
}
