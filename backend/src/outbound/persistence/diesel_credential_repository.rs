//! PostgreSQL-backed `CredentialRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::User;
use crate::domain::ports::{CredentialRepository, CredentialRepositoryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed credential store.
#[derive(Clone)]
pub struct DieselCredentialRepository {
    pool: DbPool,
}

impl DieselCredentialRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CredentialRepositoryError {
    map_basic_pool_error(error, CredentialRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CredentialRepositoryError {
    map_basic_diesel_error(
        error,
        CredentialRepositoryError::query,
        CredentialRepositoryError::connection,
    )
}

#[async_trait]
impl CredentialRepository for DieselCredentialRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CredentialRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .find(email)
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, user: &User) -> Result<(), CredentialRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // The primary key enforces uniqueness; a skipped row means the email
        // was already taken.
        let inserted = diesel::insert_into(users::table)
            .values(&NewUserRow {
                email: user.email(),
                password_hash: user.password_hash(),
            })
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if inserted == 0 {
            return Err(CredentialRepositoryError::duplicate(user.email()));
        }
        Ok(())
    }
}
