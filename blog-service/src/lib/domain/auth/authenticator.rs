use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthResult;
use crate::domain::auth::models::RejectionReason;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::CredentialStore;
use crate::domain::identity::ports::PasswordHasher;

/// Verifies username/password pairs against the credential store.
///
/// Read-only. Both failure paths cost one hash verification: an unknown
/// username is checked against a decoy hash.
pub struct LocalAuthenticator<CS, PH>
where
    CS: CredentialStore + ?Sized,
    PH: PasswordHasher + ?Sized,
{
    store: Arc<CS>,
    password_hasher: Arc<PH>,
}

impl<CS, PH> LocalAuthenticator<CS, PH>
where
    CS: CredentialStore + ?Sized,
    PH: PasswordHasher + ?Sized,
{
    pub fn new(store: Arc<CS>, password_hasher: Arc<PH>) -> Self {
        Self {
            store,
            password_hasher,
        }
    }

    /// Check a username/password pair.
    ///
    /// # Arguments
    /// * `username` - Exact, case-sensitive username
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// `Authenticated` with the stored identity, or `Rejected` with
    /// `BadUsername` / `BadPassword`
    ///
    /// # Errors
    /// * `Store` - Credential store failed
    /// * `Hasher` - Stored hash could not be read
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthResult, AuthError> {
        // A string that is not a valid username cannot belong to any account.
        let found = match Username::new(username.to_string()) {
            Ok(username) => self.store.find_by_username(&username).await?,
            Err(_) => None,
        };

        let Some(identity) = found else {
            self.password_hasher.verify_decoy(password).await;
            tracing::warn!(
                username = %username,
                reason = %RejectionReason::BadUsername,
                "Authentication rejected"
            );
            return Ok(AuthResult::Rejected(RejectionReason::BadUsername));
        };

        if self
            .password_hasher
            .verify(password, &identity.password_hash)
            .await?
        {
            tracing::debug!(identity_id = %identity.id, "Authentication succeeded");
            Ok(AuthResult::Authenticated(identity))
        } else {
            tracing::warn!(
                username = %username,
                reason = %RejectionReason::BadPassword,
                "Authentication rejected"
            );
            Ok(AuthResult::Rejected(RejectionReason::BadPassword))
        }
    }
}
