//! Driving port for account registration and login.
//!
//! Inbound adapters call this port with validated credentials and receive
//! either a signed session or a domain error. Hashing and token signing stay
//! behind the service so handler tests can substitute a mock.

use async_trait::async_trait;

use crate::domain::{Credentials, DomainError, SessionIdentity};

/// Result of a successful login: the identity and its signed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    pub identity: SessionIdentity,
    pub token: String,
}

/// Domain use-case port for accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Create a user with a freshly salted password hash.
    ///
    /// Fails with `InvalidRequest` when the email is already registered.
    async fn register(&self, credentials: &Credentials) -> Result<(), DomainError>;

    /// Check credentials and issue a session token.
    ///
    /// Unknown users and wrong passwords both fail with `Unauthorized` so
    /// callers cannot tell them apart.
    async fn login(&self, credentials: &Credentials) -> Result<IssuedSession, DomainError>;
}
