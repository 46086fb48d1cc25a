//! In-memory credential store keyed by email.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::User;
use crate::domain::ports::{CredentialRepository, CredentialRepositoryError};

#[derive(Debug, Default)]
pub struct InMemoryCredentialRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CredentialRepositoryError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), CredentialRepositoryError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(CredentialRepositoryError::duplicate(user.email()));
        }
        users.insert(user.email().to_owned(), user.clone());
        Ok(())
    }
}
