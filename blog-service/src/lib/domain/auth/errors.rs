use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::domain::identity::errors::IdentityError;

/// Infrastructure failure inside the auth core.
///
/// Credential and token problems are not errors; they are reported as
/// `AuthResult::Rejected`.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Credential store failure: {0}")]
    Store(#[from] IdentityError),

    #[error("Password hasher failure: {0}")]
    Hasher(#[from] PasswordError),

    #[error("Token signing failed: {0}")]
    Signing(#[from] JwtError),
}
