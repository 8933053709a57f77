use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::parse_post_id;
use super::validate_post_fields;
use super::PostData;
use crate::domain::post::models::UpdatePostCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentIdentity;
use crate::inbound::http::router::AppState;

pub async fn update_post(
    State(state): State<AppState>,
    CurrentIdentity(context): CurrentIdentity,
    Path(post_id): Path<String>,
    Json(body): Json<UpdatePostRequestBody>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let post_id = parse_post_id(&post_id)?;
    let command = body.try_into_command()?;

    state
        .post_service
        .update_post(&context.identity_id(), &post_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}

/// Omitting `published` leaves the flag unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePostRequestBody {
    title: String,
    text_content: String,
    #[serde(default)]
    published: Option<bool>,
}

impl UpdatePostRequestBody {
    fn try_into_command(self) -> Result<UpdatePostCommand, ApiError> {
        let (title, text_content) = validate_post_fields(self.title, self.text_content)?;
        Ok(UpdatePostCommand {
            title,
            text_content,
            published: self.published,
        })
    }
}
