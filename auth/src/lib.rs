//! Authentication core for the chirpy backend.
//!
//! Provides the credential machinery the HTTP handlers and persistence layer
//! build on:
//! - Password hashing (bcrypt)
//! - Signed identity tokens (JWT, HS256) with stateless validation
//! - Opaque refresh tokens (random hex, persisted and revocable by the caller)
//! - `Authorization` header parsing (`Bearer` and `ApiKey` schemes)
//!
//! The identity token and the refresh token are deliberately distinct types:
//! the former is validated purely by signature and expiry, the latter is a
//! capability reference resolved against the caller's store.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! ```
//!
//! ## Identity Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let user_id = Uuid::new_v4();
//! let token = handler.issue(user_id, Duration::hours(1)).unwrap();
//! assert_eq!(handler.validate(&token).unwrap(), user_id);
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let user_id = Uuid::new_v4();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify, mint access and refresh tokens
//! let result = auth
//!     .login("password123", &hash, user_id, Duration::hours(1))
//!     .unwrap();
//!
//! // Validate the access token
//! assert_eq!(auth.validate_token(&result.access_token).unwrap(), user_id);
//! assert_eq!(result.refresh_token.user_id, user_id);
//! ```

pub mod authenticator;
pub mod config;
pub mod header;
pub mod jwt;
pub mod password;
pub mod refresh;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use config::ApiConfig;
pub use config::AuthConfig;
pub use config::JwtConfig;
pub use header::extract_api_key;
pub use header::extract_bearer;
pub use header::HeaderError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use refresh::RefreshToken;
pub use refresh::RefreshTokenError;
