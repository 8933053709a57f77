use axum::extract::State;
use axum::http::StatusCode;

use super::PostListData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentIdentity;
use crate::inbound::http::router::AppState;

/// Every post of the calling author, drafts included.
pub async fn list_author_posts(
    State(state): State<AppState>,
    CurrentIdentity(context): CurrentIdentity,
) -> Result<ApiSuccess<PostListData>, ApiError> {
    state
        .post_service
        .list_author_posts(&context.identity_id())
        .await
        .map_err(ApiError::from)
        .map(|ref posts| ApiSuccess::new(StatusCode::OK, posts.into()))
}
