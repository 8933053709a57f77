use async_trait::async_trait;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CommentText;
use crate::domain::identity::models::IdentityId;
use crate::domain::post::models::PostId;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Add a comment to a published post.
    ///
    /// # Errors
    /// * `PostNotFound` - Post does not exist or is a draft
    /// * `DatabaseError` - Database operation failed
    async fn create_comment(
        &self,
        author: &IdentityId,
        post_id: &PostId,
        text: CommentText,
    ) -> Result<Comment, CommentError>;

    /// Comments of a post, oldest first.
    ///
    /// # Errors
    /// * `PostNotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn list_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, CommentError>;

    /// Remove a comment from a post.
    ///
    /// # Errors
    /// * `NotFound` - Comment does not exist or belongs to another post
    /// * `DatabaseError` - Database operation failed
    async fn delete_comment(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
    ) -> Result<(), CommentError>;
}

/// Persistence operations for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;

    /// Comments of one post ordered by creation time, oldest first.
    async fn list_by_post(&self, post_id: &PostId) -> Result<Vec<Comment>, CommentError>;

    /// # Errors
    /// * `NotFound` - Comment does not exist
    async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;

    /// Remove every comment of a post.
    ///
    /// # Returns
    /// Number of comments removed
    async fn delete_by_post(&self, post_id: &PostId) -> Result<u64, CommentError>;
}
