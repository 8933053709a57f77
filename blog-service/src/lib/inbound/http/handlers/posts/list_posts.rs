use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::PostData;
use crate::domain::post::models::Post;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_published_posts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<PostListData>, ApiError> {
    state
        .post_service
        .list_published_posts()
        .await
        .map_err(ApiError::from)
        .map(|ref posts| ApiSuccess::new(StatusCode::OK, posts.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostListData {
    pub posts: Vec<PostData>,
}

impl From<&Vec<Post>> for PostListData {
    fn from(posts: &Vec<Post>) -> Self {
        Self {
            posts: posts.iter().map(PostData::from).collect(),
        }
    }
}
