//! Port abstraction for the credential store and its errors.

use async_trait::async_trait;

use crate::domain::{DomainError, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by credential store adapters.
    pub enum CredentialRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } => "credential store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "credential store query failed: {message}",
        /// A user with this email already exists.
        Duplicate { email: String } => "a user is already registered as {email}",
    }
}

impl From<CredentialRepositoryError> for DomainError {
    fn from(error: CredentialRepositoryError) -> Self {
        match error {
            CredentialRepositoryError::Connection { message } => Self::service_unavailable(message),
            CredentialRepositoryError::Query { message } => Self::internal(message),
            CredentialRepositoryError::Duplicate { email } => {
                Self::invalid_request(format!("email already registered: {email}"))
            }
        }
    }
}

/// Driven port over stored user credentials, keyed by email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Fetch a user by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CredentialRepositoryError>;

    /// Insert a new user, failing with `Duplicate` when the email is taken.
    async fn insert(&self, user: &User) -> Result<(), CredentialRepositoryError>;
}
