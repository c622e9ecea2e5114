use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::JwtError;

/// Identity token signer and validator.
///
/// Uses HS256 (HMAC with SHA-256) over a single process-wide secret. The
/// secret is always supplied explicitly at construction; there are no
/// per-user keys and no implicit global.
///
/// Validation is stateless: signature plus expiry, no session table. Tokens
/// are short-lived, and medium-term session continuation is handled by the
/// separate (revocable) refresh token.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a handler from the signing secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token asserting `user_id`, expiring `lifetime` from now.
    ///
    /// Lifetime is a required argument at every call site; the service default
    /// lives in configuration, not here.
    ///
    /// # Errors
    /// * `EncodingFailed` - Internal serialization failure
    pub fn issue(&self, user_id: Uuid, lifetime: Duration) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, lifetime);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return the user id it asserts.
    ///
    /// # Errors
    /// * `InvalidSignature` - Token was not signed with our secret
    /// * `TokenExpired` - Expiry is in the past
    /// * `MalformedSubject` - Subject is absent or not a well-formed UUID
    /// * `InvalidToken` - Token is not a parseable compact JWS
    pub fn validate(&self, token: &str) -> Result<Uuid, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // The default 60s leeway would keep a 5-second token alive for over a
        // minute; expiry must be exact.
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    _ => JwtError::InvalidToken(e.to_string()),
                }
            })?;

        token_data.claims.subject()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration as StdDuration;

    use super::super::claims::ISSUER;
    use super::*;

    #[test]
    fn test_issue_and_validate() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let user_id = Uuid::new_v4();

        let token = handler
            .issue(user_id, Duration::seconds(5))
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let validated = handler.validate(&token).expect("Failed to validate token");
        assert_eq!(validated, user_id);
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");
        let user_id = Uuid::new_v4();

        let token = handler1
            .issue(user_id, Duration::hours(1))
            .expect("Failed to issue token");

        let result = handler2.validate(&token);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn test_validate_expired_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let user_id = Uuid::new_v4();

        let token = handler
            .issue(user_id, Duration::seconds(1))
            .expect("Failed to issue token");

        thread::sleep(StdDuration::from_secs(2));

        let result = handler.validate(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_validate_garbage_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = handler.validate("invalid.token.here");
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_validate_malformed_subject() {
        let secret = b"my_secret_key_at_least_32_bytes_long!";
        let handler = JwtHandler::new(secret);

        // Sign a claim set whose subject is not a UUID
        let claims = Claims {
            iss: ISSUER.to_string(),
            sub: "not-a-uuid".to_string(),
            iat: chrono::Utc::now().timestamp(),
            exp: chrono::Utc::now().timestamp() + 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .expect("Failed to encode claims");

        let result = handler.validate(&token);
        assert!(matches!(result, Err(JwtError::MalformedSubject(_))));
    }

    #[test]
    fn test_login_then_expire_scenario() {
        let user_id = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000")
            .expect("Failed to parse fixture id");
        let handler = JwtHandler::new(b"s3cr3t");

        let token = handler
            .issue(user_id, Duration::seconds(1))
            .expect("Failed to issue token");

        // Validates to the same user while inside the lifetime
        assert_eq!(
            handler.validate(&token).expect("Failed to validate token"),
            user_id
        );

        // And expires once the lifetime has elapsed
        thread::sleep(StdDuration::from_secs(2));
        assert!(matches!(
            handler.validate(&token),
            Err(JwtError::TokenExpired)
        ));
    }
}
