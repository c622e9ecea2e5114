use thiserror::Error;

/// Error type for refresh token operations.
#[derive(Debug, Clone, Error)]
pub enum RefreshTokenError {
    #[error("Secure random source failed: {0}")]
    InsufficientEntropy(String),
}
