use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Argon2id with the crate's default parameters. Hashes are PHC strings,
/// so algorithm, parameters and salt travel with the hash.
#[derive(Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored PHC hash.
    ///
    /// The digest comparison is constant time. A mismatch is `Ok(false)`,
    /// only an unparseable hash is an error.
    ///
    /// # Errors
    /// * `InvalidHash` - Stored hash is not a valid PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = Self::parse(hash)?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Check that a stored hash can be used for verification.
    ///
    /// # Errors
    /// * `InvalidHash` - Hash is not a valid PHC string
    pub fn validate_hash(&self, hash: &str) -> Result<(), PasswordError> {
        Self::parse(hash).map(|_| ())
    }

    fn parse(hash: &str) -> Result<PasswordHash<'_>, PasswordError> {
        PasswordHash::new(hash).map_err(|e| PasswordError::InvalidHash(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();

        let hash = hasher.hash("password123").expect("Failed to hash password");
        assert!(hash.starts_with("$argon2id$"));

        assert!(hasher.verify("password123", &hash).unwrap());
        assert!(!hasher.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("qwerty456").unwrap();
        let second = hasher.hash("qwerty456").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("qwerty456", &first).unwrap());
        assert!(hasher.verify("qwerty456", &second).unwrap());
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();

        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::InvalidHash(_))));
    }

    #[test]
    fn test_validate_hash() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("password123").unwrap();

        assert!(hasher.validate_hash(&hash).is_ok());
        assert!(hasher.validate_hash("plaintext").is_err());
    }
}
