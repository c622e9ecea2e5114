use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::JwtError;

/// Issuer written into every token this service signs.
pub const ISSUER: &str = "chirpy";

/// Claim set carried by an identity token.
///
/// The token is self-contained: validity is determined by signature and
/// expiry alone, never by a store lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Issuer (always [`ISSUER`] for tokens we sign)
    pub iss: String,

    /// Subject: the user id in canonical UUID string form
    #[serde(default)]
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, expiring `lifetime` from now.
    pub fn for_user(user_id: Uuid, lifetime: Duration) -> Self {
        let now = Utc::now();

        Self {
            iss: ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        }
    }

    /// Parse the subject claim back into a user id.
    ///
    /// # Errors
    /// * `MalformedSubject` - Subject is absent or not a well-formed UUID
    pub fn subject(&self) -> Result<Uuid, JwtError> {
        Uuid::parse_str(&self.sub).map_err(|_| JwtError::MalformedSubject(self.sub.clone()))
    }

    /// Check whether the token has expired as of `now` (Unix timestamp).
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp < now
    }
}
