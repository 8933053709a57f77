use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use tokio::sync::RwLock;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::CredentialHash;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::PersonName;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::CredentialStore;

pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_identity(row: &PgRow) -> Result<Identity, IdentityError> {
        let column_error = |e: sqlx::Error| IdentityError::DatabaseError(e.to_string());

        Ok(Identity {
            id: IdentityId(row.try_get("id").map_err(column_error)?),
            username: Username::new(row.try_get("username").map_err(column_error)?)?,
            password_hash: CredentialHash::new(row.try_get("password_hash").map_err(column_error)?),
            is_author: row.try_get("is_author").map_err(column_error)?,
            firstname: PersonName::new(row.try_get("firstname").map_err(column_error)?)?,
            lastname: PersonName::new(row.try_get("lastname").map_err(column_error)?)?,
            created_at: row.try_get("created_at").map_err(column_error)?,
        })
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn create(&self, identity: Identity) -> Result<Identity, IdentityError> {
        sqlx::query(
            r#"
            INSERT INTO identities (id, username, password_hash, is_author, firstname, lastname, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(identity.id.as_uuid())
        .bind(identity.username.as_str())
        .bind(identity.password_hash.as_str())
        .bind(identity.is_author)
        .bind(identity.firstname.as_str())
        .bind(identity.lastname.as_str())
        .bind(identity.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("identities_username_key")
                {
                    return IdentityError::UsernameAlreadyExists(
                        identity.username.as_str().to_string(),
                    );
                }
            }
            IdentityError::DatabaseError(e.to_string())
        })?;

        Ok(identity)
    }

    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, IdentityError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, is_author, firstname, lastname, created_at
            FROM identities
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_identity).transpose()
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Identity>, IdentityError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, is_author, firstname, lastname, created_at
            FROM identities
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_identity).transpose()
    }

    async fn set_author(
        &self,
        id: &IdentityId,
        is_author: bool,
    ) -> Result<Identity, IdentityError> {
        let row = sqlx::query(
            r#"
            UPDATE identities
            SET is_author = $2
            WHERE id = $1
            RETURNING id, username, password_hash, is_author, firstname, lastname, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(is_author)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Self::row_to_identity(&r),
            None => Err(IdentityError::NotFound(id.to_string())),
        }
    }
}

/// Credential store kept in process memory.
///
/// Username uniqueness is checked and the record inserted under one write lock.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    identities: RwLock<HashMap<IdentityId, Identity>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn create(&self, identity: Identity) -> Result<Identity, IdentityError> {
        let mut identities = self.identities.write().await;

        if identities
            .values()
            .any(|existing| existing.username == identity.username)
        {
            return Err(IdentityError::UsernameAlreadyExists(
                identity.username.as_str().to_string(),
            ));
        }

        identities.insert(identity.id, identity.clone());

        Ok(identity)
    }

    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, IdentityError> {
        Ok(self.identities.read().await.get(id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Identity>, IdentityError> {
        Ok(self
            .identities
            .read()
            .await
            .values()
            .find(|identity| identity.username == *username)
            .cloned())
    }

    async fn set_author(
        &self,
        id: &IdentityId,
        is_author: bool,
    ) -> Result<Identity, IdentityError> {
        let mut identities = self.identities.write().await;

        let identity = identities
            .get_mut(id)
            .ok_or(IdentityError::NotFound(id.to_string()))?;
        identity.is_author = is_author;

        Ok(identity.clone())
    }
}
