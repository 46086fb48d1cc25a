//! Account domain service.
//!
//! Implements the [`AccountCommand`] driving port on top of the credential
//! store, the password hasher, and the session token codec.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    AccountCommand, CredentialRepository, IssuedSession, PasswordHasher, SessionTokens,
};
use crate::domain::{Credentials, DomainError, SessionIdentity, User};

/// Generic message for every credential mismatch.
pub const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Registration and login over injected adapters.
#[derive(Clone)]
pub struct AccountService<R, H, T> {
    users: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<R, H, T> AccountService<R, H, T> {
    /// Create a new account service.
    pub fn new(users: Arc<R>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R, H, T> AccountCommand for AccountService<R, H, T>
where
    R: CredentialRepository,
    H: PasswordHasher,
    T: SessionTokens,
{
    async fn register(&self, credentials: &Credentials) -> Result<(), DomainError> {
        let hash = self.hasher.hash(credentials.password()).await?;
        let user = User::new(credentials.email(), hash);
        self.users.insert(&user).await?;
        debug!(email = %user.email(), "registered user");
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<IssuedSession, DomainError> {
        let Some(user) = self.users.find_by_email(credentials.email()).await? else {
            debug!("login rejected: unknown email");
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS));
        };

        let matches = self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .await?;
        if !matches {
            debug!("login rejected: password mismatch");
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS));
        }

        let identity = SessionIdentity::new(user.email());
        let token = self
            .tokens
            .issue(&identity)
            .map_err(|err| DomainError::internal(err.to_string()))?;
        Ok(IssuedSession { identity, token })
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
