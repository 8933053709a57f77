use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;

/// Sessions are stateless, so nothing is revoked server-side.
pub async fn logout() -> ApiSuccess<MessageData> {
    ApiSuccess::new(
        StatusCode::OK,
        MessageData::new("Logged out, discard the token on the client"),
    )
}
