use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use tokio::sync::RwLock;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CommentText;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::identity::models::IdentityId;
use crate::domain::post::models::PostId;

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_comment(row: &PgRow) -> Result<Comment, CommentError> {
        let column_error = |e: sqlx::Error| CommentError::DatabaseError(e.to_string());

        Ok(Comment {
            id: CommentId(row.try_get("id").map_err(column_error)?),
            post_id: PostId(row.try_get("post_id").map_err(column_error)?),
            author_id: IdentityId(row.try_get("author_id").map_err(column_error)?),
            text: CommentText::new(row.try_get("text").map_err(column_error)?)?,
            created_at: row.try_get("created_at").map_err(column_error)?,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, post_id, author_id, text, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id.as_uuid())
        .bind(comment.post_id.as_uuid())
        .bind(comment.author_id.as_uuid())
        .bind(comment.text.as_str())
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        Ok(comment)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        let row = sqlx::query(
            r#"
            SELECT id, post_id, author_id, text, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_comment).transpose()
    }

    async fn list_by_post(&self, post_id: &PostId) -> Result<Vec<Comment>, CommentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, post_id, author_id, text, created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_comment).collect()
    }

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete_by_post(&self, post_id: &PostId) -> Result<u64, CommentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}

/// Comment repository kept in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        self.comments.write().await.push(comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        Ok(self
            .comments
            .read()
            .await
            .iter()
            .find(|comment| comment.id == *id)
            .cloned())
    }

    async fn list_by_post(&self, post_id: &PostId) -> Result<Vec<Comment>, CommentError> {
        let mut comments: Vec<Comment> = self
            .comments
            .read()
            .await
            .iter()
            .filter(|comment| comment.post_id == *post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|comment| comment.created_at);

        Ok(comments)
    }

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError> {
        let mut comments = self.comments.write().await;

        let before = comments.len();
        comments.retain(|comment| comment.id != *id);

        if comments.len() == before {
            return Err(CommentError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete_by_post(&self, post_id: &PostId) -> Result<u64, CommentError> {
        let mut comments = self.comments.write().await;

        let before = comments.len();
        comments.retain(|comment| comment.post_id != *post_id);

        Ok((before - comments.len()) as u64)
    }
}
