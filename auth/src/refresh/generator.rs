use rand::rngs::OsRng;
use rand::RngCore;

use super::errors::RefreshTokenError;

/// Entropy drawn per token: 32 bytes = 256 bits.
const TOKEN_BYTES: usize = 32;

/// Generate an opaque refresh token: 64 lowercase hex characters.
///
/// The token carries no claims; it is a capability reference resolved by
/// looking it up in the caller's store.
///
/// # Errors
/// * `InsufficientEntropy` - The OS random source could not supply bytes.
///   A partially filled buffer is never encoded.
pub fn generate() -> Result<String, RefreshTokenError> {
    let mut buffer = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut buffer)
        .map_err(|e| RefreshTokenError::InsufficientEntropy(e.to_string()))?;

    Ok(hex::encode(buffer))
}
