use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use tokio::sync::RwLock;

use crate::domain::identity::models::IdentityId;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostRepository;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_post(row: &PgRow) -> Result<Post, PostError> {
        let column_error = |e: sqlx::Error| PostError::DatabaseError(e.to_string());

        Ok(Post {
            id: PostId(row.try_get("id").map_err(column_error)?),
            title: PostTitle::new(row.try_get("title").map_err(column_error)?)?,
            text_content: PostContent::new(row.try_get("text_content").map_err(column_error)?)?,
            published: row.try_get("published").map_err(column_error)?,
            author_id: IdentityId(row.try_get("author_id").map_err(column_error)?),
            created_at: row.try_get("created_at").map_err(column_error)?,
            updated_at: row.try_get("updated_at").map_err(column_error)?,
        })
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, title, text_content, published, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(post.title.as_str())
        .bind(post.text_content.as_str())
        .bind(post.published)
        .bind(post.author_id.as_uuid())
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, text_content, published, author_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_post).transpose()
    }

    async fn list_published(&self) -> Result<Vec<Post>, PostError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, text_content, published, author_id, created_at, updated_at
            FROM posts
            WHERE published = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_post).collect()
    }

    async fn list_by_author(&self, author_id: &IdentityId) -> Result<Vec<Post>, PostError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, text_content, published, author_id, created_at, updated_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(author_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_post).collect()
    }

    async fn update(&self, post: Post) -> Result<Post, PostError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, text_content = $3, published = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(post.title.as_str())
        .bind(post.text_content.as_str())
        .bind(post.published)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(post.id.to_string()));
        }

        Ok(post)
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

/// Post repository kept in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest first; later insertions win ties on `created_at`.
    fn newest_first<'a>(posts: impl DoubleEndedIterator<Item = &'a Post>) -> Vec<Post> {
        let mut selected: Vec<Post> = posts.rev().cloned().collect();
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        selected
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .find(|post| post.id == *id)
            .cloned())
    }

    async fn list_published(&self) -> Result<Vec<Post>, PostError> {
        let posts = self.posts.read().await;
        Ok(Self::newest_first(posts.iter().filter(|post| post.published)))
    }

    async fn list_by_author(&self, author_id: &IdentityId) -> Result<Vec<Post>, PostError> {
        let posts = self.posts.read().await;
        Ok(Self::newest_first(
            posts.iter().filter(|post| post.author_id == *author_id),
        ))
    }

    async fn update(&self, post: Post) -> Result<Post, PostError> {
        let mut posts = self.posts.write().await;

        let stored = posts
            .iter_mut()
            .find(|stored| stored.id == post.id)
            .ok_or(PostError::NotFound(post.id.to_string()))?;
        *stored = post.clone();

        Ok(post)
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        let mut posts = self.posts.write().await;

        let before = posts.len();
        posts.retain(|post| post.id != *id);

        if posts.len() == before {
            return Err(PostError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
