use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::CommentId;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::PostId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

pub async fn delete_comment(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let post_id = PostId::from_string(&post_id).map_err(PostError::from)?;
    let comment_id = CommentId::from_string(&comment_id).map_err(CommentError::from)?;

    state
        .comment_service
        .delete_comment(&post_id, &comment_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData::new("Comment successfully deleted"),
            )
        })
}
