use async_trait::async_trait;
use auth::PasswordError;

use crate::domain::identity::models::CredentialHash;
use crate::domain::identity::ports::PasswordHasher;

/// Argon2id password hashing from the `auth` crate, run on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher {
    inner: auth::PasswordHasher,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<CredentialHash, PasswordError> {
        let hasher = self.inner;
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
            .map(CredentialHash::new)
    }

    async fn verify(&self, password: &str, hash: &CredentialHash) -> Result<bool, PasswordError> {
        let hasher = self.inner;
        let password = password.to_owned();
        let hash = hash.as_str().to_owned();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| PasswordError::VerificationFailed(e.to_string()))?
    }

    async fn verify_decoy(&self, password: &str) {
        let hasher = self.inner;
        let password = password.to_owned();

        if let Err(e) = tokio::task::spawn_blocking(move || hasher.verify_decoy(&password)).await {
            tracing::error!(error = %e, "Decoy verification task failed");
        }
    }
}
