use super::errors::PasswordError;

/// bcrypt work factor applied to every new hash.
pub const HASH_COST: u32 = 12;

/// Password hashing implementation.
///
/// Produces salted bcrypt hashes (`$2b$12$...`). Stored hashes carry their own
/// cost and salt, so verification accepts hashes created with any cost.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// # Returns
    /// PasswordHasher using the fixed cost factor of 12
    pub fn new() -> Self {
        Self { cost: HASH_COST }
    }

    /// Hash a plaintext password with a random salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt format hash (includes version, cost, salt and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored bcrypt hash
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
