use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::RefreshTokenError;
use super::generator;

/// Sessions live this long unless revoked first.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 60;

/// A refresh token as the persistence layer stores it.
///
/// Unlike the identity token this is stateful: the caller persists it, looks
/// it up on `/refresh`, and records a revocation time on `/revoke` or when a
/// new login supersedes it. Once expired or revoked it must be rejected;
/// enforcing read-after-write consistency for the revocation flag is the
/// store's contract, not ours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshToken {
    /// The opaque token value handed to the client (64 hex chars)
    pub token: String,

    /// Owning user
    pub user_id: Uuid,

    pub created_at: DateTime<Utc>,

    /// Fixed window from issuance; see [`REFRESH_TOKEN_TTL_DAYS`]
    pub expires_at: DateTime<Utc>,

    /// Absent means not revoked
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Mint a fresh session token for `user_id`.
    ///
    /// # Errors
    /// * `InsufficientEntropy` - The random source failed
    pub fn issue(user_id: Uuid) -> Result<Self, RefreshTokenError> {
        let token = generator::generate()?;
        let now = Utc::now();

        Ok(Self {
            token,
            user_id,
            created_at: now,
            expires_at: now + Duration::days(REFRESH_TOKEN_TTL_DAYS),
            revoked_at: None,
        })
    }

    /// Record revocation. The first revocation time sticks.
    pub fn revoke(&mut self, now: DateTime<Utc>) {
        if self.revoked_at.is_none() {
            self.revoked_at = Some(now);
        }
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// Usable only while unexpired and unrevoked.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.is_revoked() && !self.is_expired(now)
    }
}
