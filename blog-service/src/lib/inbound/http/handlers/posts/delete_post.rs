use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_post_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::middleware::CurrentIdentity;
use crate::inbound::http::router::AppState;

pub async fn delete_post(
    State(state): State<AppState>,
    CurrentIdentity(context): CurrentIdentity,
    Path(post_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let post_id = parse_post_id(&post_id)?;

    state
        .post_service
        .delete_post(&context.identity_id(), &post_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData::new("Post successfully deleted"),
            )
        })
}
