use thiserror::Error;

/// Error for CommentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for comment text validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentTextError {
    #[error("Your comment cannot be empty")]
    Empty,

    #[error("Only {max} characters are allowed, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all comment-related operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    #[error("Invalid comment ID: {0}")]
    InvalidCommentId(#[from] CommentIdError),

    #[error("Invalid comment: {0}")]
    InvalidText(#[from] CommentTextError),

    // Domain-level errors
    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Comment not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for CommentError {
    fn from(err: anyhow::Error) -> Self {
        CommentError::Unknown(err.to_string())
    }
}
