use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::IdentityData;
use crate::domain::auth::models::AuthResult;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    if body.username.trim().is_empty() || body.password.is_empty() {
        tracing::warn!(reason = "empty_credentials", "Login rejected");
        return Err(ApiError::invalid_credentials());
    }

    // The failing factor is logged by the authenticator, never returned.
    let identity = match state
        .authenticator
        .authenticate(&body.username, &body.password)
        .await?
    {
        AuthResult::Authenticated(identity) => identity,
        AuthResult::Rejected(_) => return Err(ApiError::invalid_credentials()),
    };

    let issued = state.token_issuer.issue(&identity)?;

    tracing::info!(identity_id = %identity.id, "Login succeeded");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: issued.token,
            expires_at: issued.expires_at,
            user: (&identity).into(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: IdentityData,
}
