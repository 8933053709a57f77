use async_trait::async_trait;
use auth::PasswordError;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::CredentialHash;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::SignUpCommand;
use crate::domain::identity::models::Username;

/// Port for identity domain service operations.
#[async_trait]
pub trait IdentityServicePort: Send + Sync + 'static {
    /// Register a new identity. The author flag starts as false.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, password and names
    ///
    /// # Returns
    /// Created identity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn sign_up(&self, command: SignUpCommand) -> Result<Identity, IdentityError>;

    /// Retrieve identity by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_identity(&self, id: &IdentityId) -> Result<Identity, IdentityError>;

    /// Grant or revoke the author role. Administrative; not exposed over HTTP.
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `DatabaseError` - Database operation failed
    async fn set_author(&self, id: &IdentityId, is_author: bool)
        -> Result<Identity, IdentityError>;
}

/// Persistent mapping from username to credentials, role flag and profile.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Persist a new identity.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, identity: Identity) -> Result<Identity, IdentityError>;

    /// Retrieve identity by identifier.
    ///
    /// # Returns
    /// Optional identity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, IdentityError>;

    /// Retrieve identity by exact, case-sensitive username.
    ///
    /// # Returns
    /// Optional identity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Identity>, IdentityError>;

    /// Update the author flag.
    ///
    /// # Returns
    /// Identity with the new flag
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `DatabaseError` - Database operation failed
    async fn set_author(&self, id: &IdentityId, is_author: bool)
        -> Result<Identity, IdentityError>;
}

/// One-way salted password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync + 'static {
    /// Hash a plaintext password.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing failed
    async fn hash(&self, password: &str) -> Result<CredentialHash, PasswordError>;

    /// Compare a plaintext password with a stored hash.
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is unreadable
    async fn verify(&self, password: &str, hash: &CredentialHash) -> Result<bool, PasswordError>;

    /// Spend one verification's worth of work and discard the result.
    async fn verify_decoy(&self, password: &str);
}
