use thiserror::Error;

/// Error type for identity token operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token subject is not a valid user id: {0:?}")]
    MalformedSubject(String),

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
