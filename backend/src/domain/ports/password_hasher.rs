//! Port for salted password hashing.

use async_trait::async_trait;

use crate::domain::DomainError;

use super::define_port_error;

define_port_error! {
    /// Failures raised while hashing or verifying passwords.
    pub enum PasswordHasherError {
        /// Hash generation failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// The stored hash could not be parsed or compared.
        Verify { message: String } => "password verification failed: {message}",
    }
}

impl From<PasswordHasherError> for DomainError {
    fn from(error: PasswordHasherError) -> Self {
        Self::internal(error.to_string())
    }
}

/// Hashes new passwords with a random per-user salt and checks candidates
/// against stored hashes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce an encoded salted hash for `password`.
    async fn hash(&self, password: &str) -> Result<String, PasswordHasherError>;

    /// Whether `password` matches the encoded `hash`.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHasherError>;
}
