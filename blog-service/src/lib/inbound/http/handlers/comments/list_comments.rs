use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::CommentData;
use crate::domain::comment::models::Comment;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::PostId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<ApiSuccess<CommentListData>, ApiError> {
    let post_id = PostId::from_string(&post_id).map_err(PostError::from)?;

    state
        .comment_service
        .list_comments(&post_id)
        .await
        .map_err(ApiError::from)
        .map(|ref comments| ApiSuccess::new(StatusCode::OK, comments.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentListData {
    pub comments: Vec<CommentData>,
}

impl From<&Vec<Comment>> for CommentListData {
    fn from(comments: &Vec<Comment>) -> Self {
        Self {
            comments: comments.iter().map(CommentData::from).collect(),
        }
    }
}
