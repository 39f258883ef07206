use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::credential::errors::CredentialError;
use crate::credential::models::AccessToken;
use crate::credential::models::Identity;
use crate::credential::models::Username;
use crate::credential::ports::CredentialRepository;
use crate::credential::ports::CredentialServicePort;

/// Domain service implementation for login.
///
/// Consults the credential store, verifies the password and issues tokens
/// through the shared `Authenticator`.
pub struct CredentialService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    authenticator: Arc<Authenticator>,
}

impl<CR> CredentialService<CR>
where
    CR: CredentialRepository,
{
    pub fn new(repository: Arc<CR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<CR> CredentialServicePort for CredentialService<CR>
where
    CR: CredentialRepository,
{
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Identity, CredentialError> {
        // A name that could never be registered is just an unknown user.
        let username = match Username::new(username.to_string()) {
            Ok(username) => username,
            Err(e) => {
                tracing::debug!(reason = %e, "Rejected login for malformed username");
                return Err(CredentialError::InvalidCredentials);
            }
        };

        let credential = match self.repository.find_by_username(&username).await? {
            Some(credential) => credential,
            None => {
                tracing::debug!(username = %username, "Rejected login for unknown username");
                return Err(CredentialError::InvalidCredentials);
            }
        };

        if !self
            .authenticator
            .verify_password(password, &credential.password_hash)?
        {
            tracing::debug!(username = %username, "Rejected login for wrong password");
            return Err(CredentialError::InvalidCredentials);
        }

        Ok(Identity {
            username: credential.username,
        })
    }

    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, CredentialError> {
        let identity = self.authenticate(username, password).await?;
        let issued = self.authenticator.issue_token(identity.username.as_str())?;

        tracing::info!(
            username = %identity.username,
            expires_at = issued.expires_at,
            "Session token issued"
        );

        Ok(issued.into())
    }
}
