//! SQL-backed comment repository.

use async_trait::async_trait;
use sea_orm::{DbConn, QueryResult};
use uuid::Uuid;

use blog_core::domain::{Comment, NewComment};
use blog_core::error::RepoError;
use blog_core::ports::CommentRepository;

use super::store::{SqlStore, get};

pub(crate) const INSERT_COMMENT: &str =
    "INSERT INTO comment (id, post_id, content) VALUES ($1, $2, $3)";

pub(crate) const SELECT_COMMENTS_BY_POST: &str =
    "SELECT id, post_id, content FROM comment WHERE post_id = $1";

/// Comment repository over the `comment` table.
#[derive(Clone)]
pub struct SqlCommentRepository {
    store: SqlStore,
}

impl SqlCommentRepository {
    pub fn new(db: DbConn) -> Self {
        Self {
            store: SqlStore::new(db),
        }
    }
}

fn comment_from_row(row: &QueryResult) -> Result<Comment, RepoError> {
    let id: String = get(row, "id")?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| RepoError::Query(format!("invalid comment id {id:?}: {e}")))?;

    Ok(Comment {
        id,
        post_id: get(row, "post_id")?,
        content: get(row, "content")?,
    })
}

#[async_trait]
impl CommentRepository for SqlCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError> {
        self.store
            .execute(
                INSERT_COMMENT,
                vec![
                    comment.id.to_string().into(),
                    comment.post_id.clone().into(),
                    comment.content.clone().into(),
                ],
            )
            .await?;

        tracing::debug!(comment_id = %comment.id, post_id = %comment.post_id, "Comment inserted");
        Ok(comment.into())
    }

    async fn list_by_post(&self, post_id: &str) -> Result<Vec<Comment>, RepoError> {
        let rows = self
            .store
            .query_many(SELECT_COMMENTS_BY_POST, vec![post_id.into()])
            .await?;

        rows.iter().map(comment_from_row).collect()
    }
}
