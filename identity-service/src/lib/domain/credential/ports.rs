use async_trait::async_trait;

use crate::credential::errors::CredentialError;
use crate::credential::models::AccessToken;
use crate::credential::models::Credential;
use crate::credential::models::Identity;
use crate::credential::models::Username;

/// Port for credential domain service operations.
#[async_trait]
pub trait CredentialServicePort: Send + Sync + 'static {
    /// Verify a plaintext password for a username.
    ///
    /// # Returns
    /// The authenticated identity
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Password` - Stored hash is unusable
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<Identity, CredentialError>;

    /// Authenticate and mint a signed session token for the identity.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Password` - Stored hash is unusable
    /// * `Token` - Token signing failed
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, CredentialError>;
}

/// Read access to the credential store.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Retrieve the credential for a username.
    ///
    /// # Returns
    /// Optional credential (None if the username is unknown)
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, CredentialError>;
}
