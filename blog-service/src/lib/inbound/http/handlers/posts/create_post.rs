use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::validate_post_fields;
use super::PostData;
use crate::domain::post::models::CreatePostCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentIdentity;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    CurrentIdentity(context): CurrentIdentity,
    Json(body): Json<CreatePostRequestBody>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .post_service
        .create_post(&context.identity_id(), command)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequestBody {
    title: String,
    text_content: String,
    #[serde(default)]
    published: bool,
}

impl CreatePostRequestBody {
    fn try_into_command(self) -> Result<CreatePostCommand, ApiError> {
        let (title, text_content) = validate_post_fields(self.title, self.text_content)?;
        Ok(CreatePostCommand::new(title, text_content, self.published))
    }
}
