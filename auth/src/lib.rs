//! Authentication utilities library
//!
//! Shared by the login and cart services:
//! - Password hashing (Argon2id)
//! - Session token issue and validation (JWT, HS256)
//! - Authentication coordination
//!
//! The services only share a signing secret, never state: a token issued by one
//! `Authenticator` validates in another built from the same secret.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("password123").unwrap();
//! assert!(hasher.verify("password123", &hash).unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let issued = auth.issue_token("john").unwrap();
//! assert_eq!(auth.verify_token(&issued.access_token).unwrap(), "john");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::Authenticator;
pub use authenticator::IssuedToken;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
