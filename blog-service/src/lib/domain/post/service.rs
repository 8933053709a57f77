use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::comment::ports::CommentRepository;
use crate::domain::identity::models::IdentityId;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;

/// Domain service implementation for post operations.
pub struct PostService<PR, CR>
where
    PR: PostRepository + ?Sized,
    CR: CommentRepository + ?Sized,
{
    repository: Arc<PR>,
    comments: Arc<CR>,
}

impl<PR, CR> PostService<PR, CR>
where
    PR: PostRepository + ?Sized,
    CR: CommentRepository + ?Sized,
{
    /// Create a new post service.
    ///
    /// # Arguments
    /// * `repository` - Post persistence implementation
    /// * `comments` - Comment persistence, used to remove a post's comments on delete
    pub fn new(repository: Arc<PR>, comments: Arc<CR>) -> Self {
        Self {
            repository,
            comments,
        }
    }

    async fn owned_post(&self, editor: &IdentityId, id: &PostId) -> Result<Post, PostError> {
        let post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))?;

        if !post.is_owned_by(editor) {
            tracing::warn!(post_id = %id, editor = %editor, "Edit of foreign post refused");
            return Err(PostError::NotOwner(id.to_string()));
        }

        Ok(post)
    }
}

#[async_trait]
impl<PR, CR> PostServicePort for PostService<PR, CR>
where
    PR: PostRepository + ?Sized,
    CR: CommentRepository + ?Sized,
{
    async fn create_post(
        &self,
        author: &IdentityId,
        command: CreatePostCommand,
    ) -> Result<Post, PostError> {
        let now = Utc::now();
        let post = Post {
            id: PostId::new(),
            title: command.title,
            text_content: command.text_content,
            published: command.published,
            author_id: *author,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(post).await?;

        tracing::info!(post_id = %created.id, author_id = %author, "Post created");

        Ok(created)
    }

    async fn update_post(
        &self,
        editor: &IdentityId,
        id: &PostId,
        command: UpdatePostCommand,
    ) -> Result<Post, PostError> {
        let mut post = self.owned_post(editor, id).await?;

        post.title = command.title;
        post.text_content = command.text_content;
        if let Some(published) = command.published {
            post.published = published;
        }
        post.updated_at = Utc::now();

        self.repository.update(post).await
    }

    async fn delete_post(&self, editor: &IdentityId, id: &PostId) -> Result<(), PostError> {
        self.owned_post(editor, id).await?;

        let removed = self
            .comments
            .delete_by_post(id)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        if let Err(e) = self.repository.delete(id).await {
            tracing::error!(
                post_id = %id,
                comments_removed = removed,
                error = %e,
                "Post delete failed after its comments were removed"
            );
            return Err(PostError::PartiallyDeleted {
                post_id: id.to_string(),
                comments_removed: removed,
                cause: e.to_string(),
            });
        }

        tracing::info!(post_id = %id, comments_removed = removed, "Post deleted");

        Ok(())
    }

    async fn get_published_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|post| post.published)
            .ok_or(PostError::NotFound(id.to_string()))
    }

    async fn list_published_posts(&self) -> Result<Vec<Post>, PostError> {
        self.repository.list_published().await
    }

    async fn list_author_posts(&self, author: &IdentityId) -> Result<Vec<Post>, PostError> {
        self.repository.list_by_author(author).await
    }
}
