use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::clock::Clock;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Session token minting and checking.
///
/// Combines a [`JwtHandler`] with a fixed lifetime and a [`Clock`]. Expiry is
/// judged against the clock rather than the host time so callers can control it.
pub struct SessionTokens {
    jwt_handler: JwtHandler,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

/// A freshly minted token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionTokens {
    /// Create a session token service.
    ///
    /// # Arguments
    /// * `secret` - Signing secret
    /// * `ttl` - Lifetime of every minted token
    /// * `clock` - Time source for issuance and expiry
    ///
    /// # Errors
    /// * `EmptySecret` - The secret is empty
    pub fn new(secret: &[u8], ttl: Duration, clock: Arc<dyn Clock>) -> Result<Self, JwtError> {
        Ok(Self {
            jwt_handler: JwtHandler::new(secret)?,
            ttl,
            clock,
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mint a token for `subject`, valid for the configured lifetime from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - The expiry falls outside the representable date range
    pub fn mint(&self, subject: impl ToString) -> Result<IssuedToken, JwtError> {
        let out_of_range = || JwtError::EncodingFailed("expiry out of range".to_string());

        let claims =
            Claims::for_subject(subject, self.clock.now(), self.ttl).ok_or_else(out_of_range)?;
        let token = self.jwt_handler.encode(&claims)?;
        let expires_at = claims.expires_at().ok_or_else(out_of_range)?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Decode a token and reject it if its expiry lies before the current time.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` is earlier than now
    /// * Any decoding error from [`JwtHandler::decode`]
    pub fn check(&self, token: &str) -> Result<Claims, JwtError> {
        let claims = self.jwt_handler.decode(token)?;

        if claims.is_expired(self.clock.now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::clock::FixedClock;

    const SECRET: &[u8] = b"session_secret_at_least_32_bytes_long";

    fn fixture() -> (Arc<FixedClock>, SessionTokens) {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        ));
        let tokens = SessionTokens::new(SECRET, Duration::hours(24), clock.clone()).unwrap();
        (clock, tokens)
    }

    #[test]
    fn test_mint_then_check() {
        let (clock, tokens) = fixture();

        let issued = tokens.mint("user123").unwrap();
        assert_eq!(issued.expires_at, clock.now() + Duration::hours(24));

        let claims = tokens.check(&issued.token).unwrap();
        assert_eq!(claims.sub, "user123");
    }

    #[test]
    fn test_mint_is_deterministic_for_same_instant() {
        let (_clock, tokens) = fixture();

        let first = tokens.mint("user123").unwrap();
        let second = tokens.mint("user123").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_check_after_lifetime() {
        let (clock, tokens) = fixture();
        let issued = tokens.mint("user123").unwrap();

        clock.advance(Duration::hours(24));
        assert!(tokens.check(&issued.token).is_ok());

        clock.advance(Duration::hours(1));
        assert_eq!(tokens.check(&issued.token), Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_check_foreign_token() {
        let (clock, tokens) = fixture();
        let other =
            SessionTokens::new(b"another_secret_of_sufficient_length", Duration::hours(1), clock)
                .unwrap();

        let issued = other.mint("user123").unwrap();

        assert_eq!(tokens.check(&issued.token), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_mint_with_unrepresentable_lifetime() {
        let (clock, _tokens) = fixture();
        let tokens = SessionTokens::new(SECRET, Duration::days(365 * 1_000_000), clock).unwrap();

        assert!(matches!(
            tokens.mint("user123"),
            Err(JwtError::EncodingFailed(_))
        ));
    }

    #[test]
    fn test_empty_secret() {
        let (clock, _tokens) = fixture();
        assert!(matches!(
            SessionTokens::new(b"", Duration::hours(1), clock),
            Err(JwtError::EmptySecret)
        ));
    }
}
