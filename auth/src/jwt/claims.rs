use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// Carries the authenticated subject and the token lifetime as Unix timestamps.
/// The signing key is the only server-side state, tokens are never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username of the authenticated identity)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for a subject expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Identity the token is issued to
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Claims with sub, exp and iat set
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: Some(subject.to_string()),
            exp: Some((now + ttl).timestamp()),
            iat: Some(now.timestamp()),
        }
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// A token is still valid at its expiry instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp < current_timestamp)
    }
}
