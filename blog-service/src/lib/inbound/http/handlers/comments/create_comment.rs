use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::CommentData;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::CommentText;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::PostId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentIdentity;
use crate::inbound::http::router::AppState;

pub async fn create_comment(
    State(state): State<AppState>,
    CurrentIdentity(context): CurrentIdentity,
    Path(post_id): Path<String>,
    Json(body): Json<CreateCommentRequestBody>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let post_id = PostId::from_string(&post_id).map_err(PostError::from)?;
    let text = CommentText::new(body.text).map_err(CommentError::from)?;

    state
        .comment_service
        .create_comment(&context.identity_id(), &post_id, text)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::OK, comment.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCommentRequestBody {
    text: String,
}
