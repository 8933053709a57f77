use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::comment::models::Comment;

mod create_comment;
mod delete_comment;
mod list_comments;

pub use create_comment::create_comment;
pub use create_comment::CreateCommentRequestBody;
pub use delete_comment::delete_comment;
pub use list_comments::list_comments;
pub use list_comments::CommentListData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentData {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            author_id: comment.author_id.to_string(),
            text: comment.text.as_str().to_string(),
            created_at: comment.created_at,
        }
    }
}
