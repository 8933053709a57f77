use std::sync::Arc;

use auth::JwtError;
use auth::SessionTokens;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthResult;
use crate::domain::auth::models::RejectionReason;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::ports::CredentialStore;

/// Validates session tokens and resolves their subject to a stored identity.
///
/// Checks run in order: signature and structure, expiry, subject lookup. Any
/// failure yields a rejection; only store failures are errors.
pub struct TokenVerifier<CS>
where
    CS: CredentialStore + ?Sized,
{
    tokens: Arc<SessionTokens>,
    store: Arc<CS>,
}

impl<CS> TokenVerifier<CS>
where
    CS: CredentialStore + ?Sized,
{
    pub fn new(tokens: Arc<SessionTokens>, store: Arc<CS>) -> Self {
        Self { tokens, store }
    }

    /// Verify a bearer token.
    ///
    /// # Returns
    /// `Authenticated` with the current stored identity, or `Rejected` with
    /// `MalformedToken`, `ExpiredToken` or `UnknownSubject`
    ///
    /// # Errors
    /// * `Store` - Credential store failed
    pub async fn verify(&self, token: &str) -> Result<AuthResult, AuthError> {
        let claims = match self.tokens.check(token) {
            Ok(claims) => claims,
            Err(JwtError::TokenExpired) => {
                return Ok(AuthResult::Rejected(RejectionReason::ExpiredToken));
            }
            Err(e) => {
                tracing::debug!(error = %e, "Token failed decoding");
                return Ok(AuthResult::Rejected(RejectionReason::MalformedToken));
            }
        };

        let Ok(identity_id) = IdentityId::from_string(&claims.sub) else {
            return Ok(AuthResult::Rejected(RejectionReason::UnknownSubject));
        };

        match self.store.find_by_id(&identity_id).await? {
            Some(identity) => Ok(AuthResult::Authenticated(identity)),
            None => Ok(AuthResult::Rejected(RejectionReason::UnknownSubject)),
        }
    }
}
