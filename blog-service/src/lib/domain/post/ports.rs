use async_trait::async_trait;

use crate::domain::identity::models::IdentityId;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a post owned by `author`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_post(
        &self,
        author: &IdentityId,
        command: CreatePostCommand,
    ) -> Result<Post, PostError>;

    /// Replace title and body (and optionally the published flag) of a post.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `NotOwner` - `editor` is not the post's author
    /// * `DatabaseError` - Database operation failed
    async fn update_post(
        &self,
        editor: &IdentityId,
        id: &PostId,
        command: UpdatePostCommand,
    ) -> Result<Post, PostError>;

    /// Delete a post and its comments.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `NotOwner` - `editor` is not the post's author
    /// * `DatabaseError` - Database operation failed
    async fn delete_post(&self, editor: &IdentityId, id: &PostId) -> Result<(), PostError>;

    /// Retrieve a published post.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist or is a draft
    /// * `DatabaseError` - Database operation failed
    async fn get_published_post(&self, id: &PostId) -> Result<Post, PostError>;

    /// All published posts, newest first.
    async fn list_published_posts(&self) -> Result<Vec<Post>, PostError>;

    /// All posts of `author`, drafts included, newest first.
    async fn list_author_posts(&self, author: &IdentityId) -> Result<Vec<Post>, PostError>;
}

/// Persistence operations for post aggregate.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    async fn create(&self, post: Post) -> Result<Post, PostError>;

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// Published posts ordered by creation time, newest first.
    async fn list_published(&self) -> Result<Vec<Post>, PostError>;

    /// Posts of one author ordered by creation time, newest first.
    async fn list_by_author(&self, author_id: &IdentityId) -> Result<Vec<Post>, PostError>;

    /// Overwrite a stored post.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn update(&self, post: Post) -> Result<Post, PostError>;

    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn delete(&self, id: &PostId) -> Result<(), PostError>;
}
