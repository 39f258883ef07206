use thiserror::Error;

/// Error type for JWT operations.
///
/// Decoding failures are discriminated so callers can log the cause,
/// even when every variant is reported to clients the same way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Missing required claim: {0}")]
    MissingClaim(String),
}

impl JwtError {
    /// Short machine-readable reason, suitable for structured log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            JwtError::EncodingFailed(_) => "encoding_failed",
            JwtError::Malformed(_) => "malformed",
            JwtError::InvalidSignature => "bad_signature",
            JwtError::TokenExpired => "expired",
            JwtError::MissingClaim(_) => "missing_claim",
        }
    }
}
