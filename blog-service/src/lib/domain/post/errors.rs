use thiserror::Error;

/// Error for PostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for post title validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostTitleError {
    #[error("The title must not be empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for post body validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostContentError {
    #[error("The text content must not be empty")]
    Empty,
}

/// Top-level error for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] PostTitleError),

    #[error("Invalid text content: {0}")]
    InvalidContent(#[from] PostContentError),

    // Domain-level errors
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Post {0} belongs to another author")]
    NotOwner(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// The post's comments are gone but the post row survived.
    #[error("Post {post_id} kept after removing {comments_removed} of its comments: {cause}")]
    PartiallyDeleted {
        post_id: String,
        comments_removed: u64,
        cause: String,
    },

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for PostError {
    fn from(err: anyhow::Error) -> Self {
        PostError::Unknown(err.to_string())
    }
}
