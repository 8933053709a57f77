use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Denial;
use crate::domain::auth::models::DenialReason;
use crate::domain::comment::errors::CommentError;
use crate::domain::identity::errors::IdentityError;
use crate::domain::post::errors::PostError;

pub mod comments;
pub mod identity;
pub mod posts;

pub use comments::create_comment;
pub use comments::delete_comment;
pub use comments::list_comments;
pub use identity::login;
pub use identity::logout;
pub use identity::me;
pub use identity::sign_up;
pub use posts::create_post;
pub use posts::delete_post;
pub use posts::get_post;
pub use posts::list_author_posts;
pub use posts::list_published_posts;
pub use posts::update_post;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Detail is logged, never sent to the client.
    InternalServerError(String),
    BadRequest(Vec<FieldError>),
    NotFound(String),
    Conflict(String),
    Unauthorized { message: String, reason: String },
    Forbidden(String),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>, reason: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            reason: reason.into(),
        }
    }

    /// Uniform answer to every failed login, whatever the failing factor.
    pub fn invalid_credentials() -> Self {
        Self::unauthorized("Invalid credentials", "invalid_credentials")
    }

    pub fn field(field: &str, message: impl Display) -> Self {
        ApiError::BadRequest(vec![FieldError::new(field, message)])
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, data) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorData::with_reason("Internal server error", "internal_error"),
                )
            }
            ApiError::BadRequest(errors) => (
                StatusCode::BAD_REQUEST,
                ApiErrorData {
                    message: "Validation failed".to_string(),
                    reason: Some("validation_error".to_string()),
                    errors,
                },
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiErrorData::new(msg)),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, ApiErrorData::new(msg)),
            ApiError::Unauthorized { message, reason } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorData::with_reason(message, reason),
            ),
            ApiError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                ApiErrorData::with_reason(msg, "forbidden"),
            ),
        };

        (status, Json(ApiResponseBody::new(status, data))).into_response()
    }
}

impl From<Denial> for ApiError {
    fn from(denial: Denial) -> Self {
        let message = match denial.reason {
            DenialReason::MissingCredentials => "Missing credentials",
            DenialReason::Rejected(_) => "Invalid or expired token",
            DenialReason::NotAuthorized => "You are not authorized to do that",
            DenialReason::InternalError => {
                return ApiError::InternalServerError("access check failed".to_string());
            }
        };

        ApiError::unauthorized(message, denial.reason.as_str())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::NotFound(_) => ApiError::NotFound(err.to_string()),
            IdentityError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            IdentityError::InvalidUsername(e) => ApiError::field("username", e),
            IdentityError::InvalidName(e) => ApiError::field("name", e),
            IdentityError::InvalidIdentityId(e) => ApiError::field("id", e),
            IdentityError::Password(_)
            | IdentityError::DatabaseError(_)
            | IdentityError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PostError::NotOwner(_) => {
                ApiError::Forbidden("You can only edit your own posts".to_string())
            }
            PostError::InvalidPostId(e) => ApiError::field("post_id", e),
            PostError::InvalidTitle(e) => ApiError::field("title", e),
            PostError::InvalidContent(e) => ApiError::field("text_content", e),
            PostError::DatabaseError(_)
            | PostError::PartiallyDeleted { .. }
            | PostError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(err: CommentError) -> Self {
        match err {
            CommentError::PostNotFound(_) | CommentError::NotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            CommentError::InvalidCommentId(e) => ApiError::field("comment_id", e),
            CommentError::InvalidText(e) => ApiError::field("text", e),
            CommentError::DatabaseError(_) | CommentError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ApiErrorData {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            reason: None,
            errors: Vec::new(),
        }
    }

    fn with_reason(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::new(message)
        }
    }
}

/// One failing request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Display) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Collects every failing field of a request before answering.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Record the error of `result` under `field`, if any.
    pub fn check<T, E: Display>(&mut self, field: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.push(field, e);
                None
            }
        }
    }

    pub fn push(&mut self, field: &str, message: impl Display) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::BadRequest(errors.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub async fn welcome() -> ApiSuccess<MessageData> {
    ApiSuccess::new(StatusCode::OK, MessageData::new("Welcome to the blog API"))
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;
    use crate::domain::auth::models::RejectionReason;

    async fn body_of(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_denial_maps_to_reasoned_401() {
        let (status, body) =
            body_of(Denial::rejected(RejectionReason::ExpiredToken).into()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["status_code"], 401);
        assert_eq!(body["data"]["reason"], "expired_token");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let (status, body) = body_of(Denial::internal_error().into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["data"]["message"], "Internal server error");
        assert_eq!(body["data"]["reason"], "internal_error");

        let (_, body) =
            body_of(PostError::DatabaseError("relation posts missing".to_string()).into()).await;
        assert!(!body.to_string().contains("relation posts missing"));
    }

    #[tokio::test]
    async fn test_field_errors_are_listed() {
        let mut errors = FieldErrors::default();
        errors.push("title", "The title must not be empty");
        errors.push("text_content", "The text content must not be empty");

        let (status, body) = body_of(errors.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["data"]["errors"][0]["field"], "title");
        assert_eq!(body["data"]["errors"][1]["field"], "text_content");
    }

    #[tokio::test]
    async fn test_not_owner_is_forbidden() {
        let (status, body) = body_of(PostError::NotOwner("id".to_string()).into()).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["data"]["reason"], "forbidden");
    }
}
