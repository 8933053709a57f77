use axum::http::StatusCode;

use super::IdentityData;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentIdentity;

pub async fn me(CurrentIdentity(context): CurrentIdentity) -> ApiSuccess<IdentityData> {
    ApiSuccess::new(StatusCode::OK, (&context.identity).into())
}
