use std::sync::Arc;

use auth::IssuedToken;
use auth::SessionTokens;

use crate::domain::auth::errors::AuthError;
use crate::domain::identity::models::Identity;

/// Mints session tokens whose subject is the identity ID.
pub struct TokenIssuer {
    tokens: Arc<SessionTokens>,
}

impl TokenIssuer {
    pub fn new(tokens: Arc<SessionTokens>) -> Self {
        Self { tokens }
    }

    /// Mint a token for `identity`, valid for the configured lifetime.
    ///
    /// # Errors
    /// * `Signing` - Token encoding failed
    pub fn issue(&self, identity: &Identity) -> Result<IssuedToken, AuthError> {
        let issued = self.tokens.mint(identity.id)?;

        tracing::debug!(
            identity_id = %identity.id,
            expires_at = %issued.expires_at,
            "Session token issued"
        );

        Ok(issued)
    }
}
