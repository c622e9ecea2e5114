use thiserror::Error;

/// Error type for `Authorization` header parsing.
#[derive(Debug, Clone, Error)]
pub enum HeaderError {
    #[error("Authorization header is missing or empty")]
    MissingHeader,

    #[error("Authorization header does not start with \"{0} \"")]
    MissingPrefix(&'static str),

    #[error("Authorization header carries no credential")]
    EmptyToken,
}
