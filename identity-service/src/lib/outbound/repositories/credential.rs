use std::collections::HashMap;

use async_trait::async_trait;
use auth::Authenticator;

use crate::config::UserConfig;
use crate::credential::errors::CredentialError;
use crate::credential::models::Credential;
use crate::credential::models::Username;
use crate::credential::ports::CredentialRepository;

/// Credential store held in process memory.
///
/// Populated once at startup and read-only afterwards, so lookups need no lock.
#[derive(Debug, Default)]
pub struct InMemoryCredentialRepository {
    credentials: HashMap<Username, Credential>,
}

impl InMemoryCredentialRepository {
    /// Build the store from ready-made credentials.
    ///
    /// # Errors
    /// * `DuplicateUser` - Two credentials share a username
    pub fn new(credentials: Vec<Credential>) -> Result<Self, CredentialError> {
        let mut by_username = HashMap::with_capacity(credentials.len());

        for credential in credentials {
            let username = credential.username.clone();
            if by_username.insert(username.clone(), credential).is_some() {
                return Err(CredentialError::DuplicateUser(username.to_string()));
            }
        }

        Ok(Self {
            credentials: by_username,
        })
    }

    /// Build the store from configured user seeds.
    ///
    /// Plaintext seeds are hashed here; configured hashes are checked for
    /// a parseable PHC format so a bad entry fails startup, not a login.
    ///
    /// # Errors
    /// * `InvalidUsername` - Seed username fails validation
    /// * `MissingSecret` - Seed has neither password nor hash
    /// * `Password` - Hashing failed or configured hash is invalid
    /// * `DuplicateUser` - Two seeds share a username
    pub fn from_config(
        users: &[UserConfig],
        authenticator: &Authenticator,
    ) -> Result<Self, CredentialError> {
        let credentials = users
            .iter()
            .map(|user| {
                let username = Username::new(user.username.clone())?;

                let password_hash = match (&user.password_hash, &user.password) {
                    (Some(hash), _) => {
                        authenticator.validate_password_hash(hash)?;
                        hash.clone()
                    }
                    (None, Some(password)) => authenticator.hash_password(password)?,
                    (None, None) => {
                        return Err(CredentialError::MissingSecret(user.username.clone()))
                    }
                };

                Ok(Credential {
                    username,
                    password_hash,
                })
            })
            .collect::<Result<Vec<_>, CredentialError>>()?;

        Self::new(credentials)
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, CredentialError> {
        Ok(self.credentials.get(username).cloned())
    }
}
