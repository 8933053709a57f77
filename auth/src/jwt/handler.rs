use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT token handler for encoding and decoding session tokens.
///
/// Uses HS256 (HMAC with SHA-256). Signature and structure are verified here;
/// expiry is judged by the caller against its own clock.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Errors
    /// * `EmptySecret` - The secret is empty
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Encode claims into a signed JWT.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode a token and verify its signature and shape.
    ///
    /// `sub` and `exp` must be present. The `exp` value itself is not compared
    /// with the current time.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signed with another key
    /// * `MissingClaim` - `sub` or `exp` absent
    /// * `Malformed` - Not a JWT, wrong algorithm, or undecodable payload
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        // Required claims are checked on the raw map, before binding to `Claims`.
        let token_data = decode::<Map<String, Value>>(token, &self.decoding_key, &validation)?;

        serde_json::from_value(Value::Object(token_data.claims))
            .map_err(|e| JwtError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn claims() -> Claims {
        Claims {
            sub: "user123".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_086_400,
        }
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let token = handler.encode(&claims()).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let first = handler.encode(&claims()).unwrap();
        let second = handler.encode(&claims()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_does_not_judge_expiry() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();
        let expired = Claims {
            sub: "user123".to_string(),
            iat: 10,
            exp: 20,
        };

        let token = handler.encode(&expired).unwrap();

        assert_eq!(handler.decode(&token).unwrap(), expired);
    }

    #[test]
    fn test_empty_secret_is_refused() {
        assert!(matches!(JwtHandler::new(b""), Err(JwtError::EmptySecret)));
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let result = handler.decode("invalid.token.here");
        assert!(matches!(result, Err(JwtError::Malformed(_))));

        let result = handler.decode("");
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!").unwrap();
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!").unwrap();

        let token = handler1.encode(&claims()).expect("Failed to encode token");

        let result = handler2.decode(&token);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn test_decode_missing_subject() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let token = handler
            .encode(&json!({ "iat": 1_700_000_000, "exp": 1_700_086_400 }))
            .unwrap();

        let result = handler.decode(&token);
        assert!(matches!(result, Err(JwtError::MissingClaim(claim)) if claim == "sub"));
    }

    #[test]
    fn test_decode_missing_expiry() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let token = handler
            .encode(&json!({ "sub": "user123", "iat": 1_700_000_000 }))
            .unwrap();

        let result = handler.decode(&token);
        assert!(matches!(result, Err(JwtError::MissingClaim(claim)) if claim == "exp"));
    }

    #[test]
    fn test_decode_payload_without_issued_at() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let token = handler
            .encode(&json!({ "sub": "user123", "exp": 1_700_086_400 }))
            .unwrap();

        assert!(matches!(handler.decode(&token), Err(JwtError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_other_algorithms() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims(),
            &EncodingKey::from_secret(b"my_secret_key_at_least_32_bytes_long!"),
        )
        .unwrap();

        assert!(matches!(handler.decode(&token), Err(JwtError::Malformed(_))));
    }
}
