use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::IdentityData;
use crate::domain::identity::models::PersonName;
use crate::domain::identity::models::SignUpCommand;
use crate::domain::identity::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::FieldErrors;
use crate::inbound::http::router::AppState;

const MIN_PASSWORD_CHARS: usize = 8;

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequestBody>,
) -> Result<ApiSuccess<IdentityData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .identity_service
        .sign_up(command)
        .await
        .map_err(ApiError::from)
        .map(|ref identity| ApiSuccess::new(StatusCode::CREATED, identity.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignUpRequestBody {
    username: String,
    password: String,
    confirm_password: String,
    firstname: String,
    lastname: String,
}

impl SignUpRequestBody {
    /// Validate every field, reporting all failures at once.
    fn try_into_command(self) -> Result<SignUpCommand, ApiError> {
        let mut errors = FieldErrors::default();

        let firstname = errors.check("firstname", PersonName::new(self.firstname));
        let lastname = errors.check("lastname", PersonName::new(self.lastname));
        let username = errors.check("username", Username::new(self.username));

        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.push(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_CHARS),
            );
        }
        if self.confirm_password != self.password {
            errors.push("confirm_password", "Passwords do not match");
        }

        match (username, firstname, lastname) {
            (Some(username), Some(firstname), Some(lastname)) if errors.is_empty() => Ok(
                SignUpCommand::new(username, self.password, firstname, lastname),
            ),
            _ => Err(errors.into()),
        }
    }
}
