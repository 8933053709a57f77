use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::auth::models::AuthContext;
use crate::domain::auth::models::Denial;
use crate::domain::auth::models::RejectionReason;
use crate::domain::auth::models::RequiredRole;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Route layer admitting any verified identity.
pub async fn require_reader(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    require_role(&state, RequiredRole::Reader, req, next).await
}

/// Route layer admitting verified identities with the author flag set.
pub async fn require_author(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    require_role(&state, RequiredRole::Author, req, next).await
}

/// Consult the access guard and run the inner handler only on allow.
///
/// The verified identity travels to the handler as an `AuthContext`
/// request extension.
async fn require_role(
    state: &AppState,
    role: RequiredRole,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers())?.map(str::to_owned);
    let context = state.access_guard.authorize(token.as_deref(), role).await?;

    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}

/// Pull the bearer token out of the `Authorization` header.
///
/// # Returns
/// `None` when the header is absent
///
/// # Errors
/// `malformed_token` when the header is not UTF-8, uses another scheme or
/// carries an empty token. The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, Denial> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let malformed = || {
        tracing::warn!(reason = "malformed_token", "Unreadable Authorization header");
        Denial::rejected(RejectionReason::MalformedToken)
    };

    let value = value.to_str().map_err(|_| malformed())?;
    let (scheme, token) = value.trim_start().split_once(' ').ok_or_else(malformed)?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("Bearer") || token.is_empty() {
        return Err(malformed());
    }

    Ok(Some(token))
}

/// Identity attached by `require_reader` / `require_author`, if the request
/// went through one of them.
pub fn current_identity(req: &Request) -> Option<&AuthContext> {
    req.extensions().get::<AuthContext>()
}

/// Extractor for handlers behind an access guard layer.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub AuthContext);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(CurrentIdentity)
            .ok_or_else(|| {
                tracing::warn!(reason = "missing_credentials", "No identity on request");
                ApiError::from(Denial::missing_credentials())
            })
    }
}
