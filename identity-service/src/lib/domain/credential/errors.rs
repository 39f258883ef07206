use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Top-level error for all credential-related operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Unknown username or wrong password; the two are never told apart.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("No password or password hash configured for user: {0}")]
    MissingSecret(String),

    #[error("Duplicate user in credential store: {0}")]
    DuplicateUser(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for CredentialError {
    fn from(err: anyhow::Error) -> Self {
        CredentialError::Unknown(err.to_string())
    }
}
