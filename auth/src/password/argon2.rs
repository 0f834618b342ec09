use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing policy.
///
/// Argon2id keyed with a process-wide secret (the "pepper") so that a copy
/// of the user table alone is not enough to mount an offline attack. The
/// `cost` configuration value maps to the Argon2 time-cost parameter; memory
/// and parallelism stay at the library defaults.
pub struct PasswordHasher {
    pepper: Vec<u8>,
    params: Params,
}

impl PasswordHasher {
    /// Create a password hasher from startup configuration.
    ///
    /// # Arguments
    /// * `pepper` - Process-wide secret mixed into every hash (never stored)
    /// * `cost` - Work factor; number of Argon2 iterations, at least 1
    ///
    /// # Errors
    /// * `EmptyPepper` - Pepper is the empty string
    /// * `InvalidParameters` - Cost is zero or the pepper exceeds the
    ///   algorithm's key-length limit
    ///
    /// Construction validates the full parameter set, so a misconfigured
    /// service fails at startup instead of hashing with weaker settings.
    pub fn new(pepper: &str, cost: u32) -> Result<Self, PasswordError> {
        if pepper.is_empty() {
            return Err(PasswordError::EmptyPepper);
        }

        let params = Params::new(Params::DEFAULT_M_COST, cost, Params::DEFAULT_P_COST, None)
            .map_err(|e| PasswordError::InvalidParameters(e.to_string()))?;

        let hasher = Self {
            pepper: pepper.as_bytes().to_vec(),
            params,
        };
        hasher.argon2()?;

        Ok(hasher)
    }

    fn argon2(&self) -> Result<Argon2<'_>, PasswordError> {
        Argon2::new_with_secret(
            &self.pepper,
            Algorithm::Argon2id,
            Version::V0x13,
            self.params.clone(),
        )
        .map_err(|e| PasswordError::InvalidParameters(e.to_string()))
    }

    /// Hash a plaintext password for storage.
    ///
    /// Generates a fresh random salt on every call, so hashing the same
    /// plaintext twice yields two different strings that both verify.
    ///
    /// # Returns
    /// PHC string format hash (algorithm, parameters, salt, and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - The hashing operation itself failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Comparison happens inside the argon2 crate in constant time. A
    /// malformed stored hash is treated as a mismatch, never an error, so
    /// callers cannot tell a corrupt record from a wrong password.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };
        let Ok(argon2) = self.argon2() else {
            return false;
        };

        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
