use super::errors::PasswordError;

/// bcrypt work factor applied to every new hash.
const BCRYPT_COST: u32 = 10;

/// Password hashing implementation.
///
/// Wraps bcrypt with random salt generation. Stored hashes carry the cost
/// and salt, so `verify` works against hashes produced at any cost.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - The bcrypt primitive rejected the input
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, BCRYPT_COST)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Comparison is constant-time, delegated to the bcrypt primitive.
    ///
    /// # Errors
    /// * `Mismatch` - Password does not match the hash
    /// * `VerificationFailed` - Stored hash is not a valid bcrypt string
    pub fn verify(&self, password: &str, hash: &str) -> Result<(), PasswordError> {
        let matches = bcrypt::verify(password, hash)
            .map_err(|e| PasswordError::VerificationFailed(e.to_string()))?;

        if matches {
            Ok(())
        } else {
            Err(PasswordError::Mismatch)
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        // Correct password verifies
        hasher
            .verify(password, &hash)
            .expect("Failed to verify password");

        // Incorrect password is a mismatch, not an operational error
        let result = hasher.verify("wrong_password", &hash);
        assert!(matches!(result, Err(PasswordError::Mismatch)));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();

        let hash1 = hasher.hash("same_password").expect("Failed to hash");
        let hash2 = hasher.hash("same_password").expect("Failed to hash");

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();

        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }
}
