use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::refresh::RefreshToken;
use crate::refresh::RefreshTokenError;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Provides the high-level login and refresh flows by coordinating the
/// password hasher, the identity token handler, and refresh token minting.
/// Persisting and looking up refresh tokens stays with the caller.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of a successful login.
pub struct AuthenticationResult {
    /// Signed identity token for the response body
    pub access_token: String,

    /// Fresh session token for the caller to persist and return
    pub refresh_token: RefreshToken,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session is expired")]
    SessionExpired,

    #[error("Session is revoked")]
    SessionRevoked,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),

    #[error("Refresh token error: {0}")]
    RefreshTokenError(#[from] RefreshTokenError),
}

impl Authenticator {
    /// Create a new authenticator from the signing secret.
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Create an authenticator from loaded configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.jwt.secret.as_bytes())
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and mint both tokens for a fresh session.
    ///
    /// The caller persists the returned refresh token, superseding any
    /// previous session for the user.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unreadable
    /// * `JwtError` - Identity token issuance failed
    /// * `RefreshTokenError` - Random source failed
    pub fn login(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: Uuid,
        lifetime: Duration,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        match self.password_hasher.verify(password, stored_hash) {
            Ok(()) => {}
            Err(PasswordError::Mismatch) => {
                tracing::warn!(%user_id, "login rejected: password mismatch");
                return Err(AuthenticationError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        }

        let access_token = self.jwt_handler.issue(user_id, lifetime)?;
        let refresh_token = RefreshToken::issue(user_id)?;
        tracing::debug!(%user_id, "issued access and refresh tokens");

        Ok(AuthenticationResult {
            access_token,
            refresh_token,
        })
    }

    /// Mint a new identity token from a persisted refresh token.
    ///
    /// The caller has already looked the session up by its token value; this
    /// checks its lifecycle state and issues the new access token.
    ///
    /// # Errors
    /// * `SessionRevoked` - Revocation time is recorded
    /// * `SessionExpired` - Session is past its expiry
    /// * `JwtError` - Identity token issuance failed
    pub fn refresh(
        &self,
        session: &RefreshToken,
        now: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<String, AuthenticationError> {
        if session.is_revoked() {
            tracing::warn!(user_id = %session.user_id, "refresh rejected: session revoked");
            return Err(AuthenticationError::SessionRevoked);
        }
        if session.is_expired(now) {
            tracing::warn!(user_id = %session.user_id, "refresh rejected: session expired");
            return Err(AuthenticationError::SessionExpired);
        }

        Ok(self.jwt_handler.issue(session.user_id, lifetime)?)
    }

    /// Validate an identity token and return the user it asserts.
    ///
    /// # Errors
    /// * `JwtError` - Signature, expiry, or subject check failed
    pub fn validate_token(&self, token: &str) -> Result<Uuid, JwtError> {
        self.jwt_handler.validate(token)
    }
}
