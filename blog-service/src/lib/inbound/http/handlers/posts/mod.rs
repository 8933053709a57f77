use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostTitle;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::FieldErrors;

mod create_post;
mod delete_post;
mod get_post;
mod list_author_posts;
mod list_posts;
mod update_post;

pub use create_post::create_post;
pub use create_post::CreatePostRequestBody;
pub use delete_post::delete_post;
pub use get_post::get_post;
pub use list_author_posts::list_author_posts;
pub use list_posts::list_published_posts;
pub use list_posts::PostListData;
pub use update_post::update_post;
pub use update_post::UpdatePostRequestBody;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub id: String,
    pub title: String,
    pub text_content: String,
    pub published: bool,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.as_str().to_string(),
            text_content: post.text_content.as_str().to_string(),
            published: post.published,
            author_id: post.author_id.to_string(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

fn parse_post_id(raw: &str) -> Result<PostId, ApiError> {
    PostId::from_string(raw)
        .map_err(PostError::from)
        .map_err(ApiError::from)
}

/// Title and body as sent by the client, both checked before either is used.
fn validate_post_fields(
    title: String,
    text_content: String,
) -> Result<(PostTitle, PostContent), ApiError> {
    let mut errors = FieldErrors::default();

    let title = errors.check("title", PostTitle::new(title));
    let text_content = errors.check("text_content", PostContent::new(text_content));

    match (title, text_content) {
        (Some(title), Some(text_content)) => Ok((title, text_content)),
        _ => Err(errors.into()),
    }
}
