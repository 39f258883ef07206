use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and session tokens.
///
/// Owns the process signing key. Tokens issued here are validated by any
/// `Authenticator` built from the same secret.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Token issued after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: i64,
}

impl Authenticator {
    /// Create an authenticator signing with `secret`.
    ///
    /// # Arguments
    /// * `secret` - HS256 signing secret
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(secret),
            token_ttl,
        }
    }

    /// Create an authenticator with a freshly generated in-memory secret.
    ///
    /// Tokens it issues stop validating once the process exits.
    pub fn with_random_secret(token_ttl: Duration) -> Self {
        Self::new(&JwtHandler::generate_secret(), token_ttl)
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// # Errors
    /// * `InvalidHash` - Stored hash cannot be parsed
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Check that a stored hash is usable.
    ///
    /// # Errors
    /// * `InvalidHash` - Stored hash cannot be parsed
    pub fn validate_password_hash(&self, stored_hash: &str) -> Result<(), PasswordError> {
        self.password_hasher.validate_hash(stored_hash)
    }

    /// Issue a signed token for `subject`, expiring after the configured TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue_token(&self, subject: &str) -> Result<IssuedToken, JwtError> {
        let claims = Claims::for_subject(subject, self.token_ttl);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(IssuedToken {
            access_token,
            expires_at: claims.exp.unwrap_or_default(),
        })
    }

    /// Validate a token and recover its subject.
    ///
    /// # Errors
    /// * `JwtError` - Token is malformed, forged, expired or has no subject
    pub fn verify_token(&self, token: &str) -> Result<String, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        claims
            .sub
            .ok_or_else(|| JwtError::MissingClaim("sub".to_string()))
    }
}
