use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::SignUpCommand;
use crate::domain::identity::ports::CredentialStore;
use crate::domain::identity::ports::IdentityServicePort;
use crate::domain::identity::ports::PasswordHasher;

/// Domain service implementation for identity operations.
///
/// Concrete implementation of IdentityServicePort with dependency injection.
pub struct IdentityService<CS, PH>
where
    CS: CredentialStore + ?Sized,
    PH: PasswordHasher + ?Sized,
{
    store: Arc<CS>,
    password_hasher: Arc<PH>,
}

impl<CS, PH> IdentityService<CS, PH>
where
    CS: CredentialStore + ?Sized,
    PH: PasswordHasher + ?Sized,
{
    /// Create a new identity service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `password_hasher` - Password hashing implementation
    pub fn new(store: Arc<CS>, password_hasher: Arc<PH>) -> Self {
        Self {
            store,
            password_hasher,
        }
    }
}

#[async_trait]
impl<CS, PH> IdentityServicePort for IdentityService<CS, PH>
where
    CS: CredentialStore + ?Sized,
    PH: PasswordHasher + ?Sized,
{
    async fn sign_up(&self, command: SignUpCommand) -> Result<Identity, IdentityError> {
        let password_hash = self.password_hasher.hash(&command.password).await?;

        let identity = Identity {
            id: IdentityId::new(),
            username: command.username,
            password_hash,
            is_author: false,
            firstname: command.firstname,
            lastname: command.lastname,
            created_at: Utc::now(),
        };

        let created = self.store.create(identity).await?;

        tracing::info!(
            identity_id = %created.id,
            username = %created.username,
            "Identity registered"
        );

        Ok(created)
    }

    async fn get_identity(&self, id: &IdentityId) -> Result<Identity, IdentityError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(IdentityError::NotFound(id.to_string()))
    }

    async fn set_author(
        &self,
        id: &IdentityId,
        is_author: bool,
    ) -> Result<Identity, IdentityError> {
        let identity = self.store.set_author(id, is_author).await?;

        tracing::info!(identity_id = %identity.id, is_author, "Author flag changed");

        Ok(identity)
    }
}
