use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CommentText;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::identity::models::IdentityId;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;

/// Domain service implementation for comment operations.
pub struct CommentService<CR, PR>
where
    CR: CommentRepository + ?Sized,
    PR: PostRepository + ?Sized,
{
    repository: Arc<CR>,
    posts: Arc<PR>,
}

impl<CR, PR> CommentService<CR, PR>
where
    CR: CommentRepository + ?Sized,
    PR: PostRepository + ?Sized,
{
    pub fn new(repository: Arc<CR>, posts: Arc<PR>) -> Self {
        Self { repository, posts }
    }

    async fn find_post(&self, post_id: &PostId) -> Result<Option<Post>, CommentError> {
        self.posts
            .find_by_id(post_id)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl<CR, PR> CommentServicePort for CommentService<CR, PR>
where
    CR: CommentRepository + ?Sized,
    PR: PostRepository + ?Sized,
{
    async fn create_comment(
        &self,
        author: &IdentityId,
        post_id: &PostId,
        text: CommentText,
    ) -> Result<Comment, CommentError> {
        self.find_post(post_id)
            .await?
            .filter(|post| post.published)
            .ok_or(CommentError::PostNotFound(post_id.to_string()))?;

        let comment = Comment {
            id: CommentId::new(),
            post_id: *post_id,
            author_id: *author,
            text,
            created_at: Utc::now(),
        };

        let created = self.repository.create(comment).await?;

        tracing::info!(
            comment_id = %created.id,
            post_id = %post_id,
            author_id = %author,
            "Comment created"
        );

        Ok(created)
    }

    async fn list_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, CommentError> {
        self.find_post(post_id)
            .await?
            .filter(|post| post.published)
            .ok_or(CommentError::PostNotFound(post_id.to_string()))?;

        self.repository.list_by_post(post_id).await
    }

    async fn delete_comment(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
    ) -> Result<(), CommentError> {
        self.repository
            .find_by_id(comment_id)
            .await?
            .filter(|comment| comment.post_id == *post_id)
            .ok_or(CommentError::NotFound(comment_id.to_string()))?;

        self.repository.delete(comment_id).await?;

        tracing::info!(comment_id = %comment_id, post_id = %post_id, "Comment deleted");

        Ok(())
    }
}
