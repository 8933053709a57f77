//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure:
//! - Password hashing (Argon2id)
//! - JWT encoding and decoding (HS256)
//! - Session tokens with a fixed lifetime judged against an injectable clock
//!
//! Services define their own authentication traits and adapt these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use std::sync::Arc;
//!
//! use auth::{SessionTokens, SystemClock};
//!
//! let tokens = SessionTokens::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     chrono::Duration::hours(24),
//!     Arc::new(SystemClock),
//! )
//! .unwrap();
//!
//! let issued = tokens.mint("user123").unwrap();
//! let claims = tokens.check(&issued.token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod clock;
pub mod jwt;
pub mod password;
pub mod session;

// Re-export commonly used items
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::IssuedToken;
pub use session::SessionTokens;
