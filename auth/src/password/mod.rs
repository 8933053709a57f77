mod argon2;

pub use self::argon2::PasswordHasher;

/// Error type for password operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
