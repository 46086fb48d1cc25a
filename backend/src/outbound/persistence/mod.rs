//! PostgreSQL persistence adapters.
//!
//! Each repository owns a clone of the shared [`DbPool`] and maps Diesel and
//! pool failures into its port's `Connection`/`Query` variants.

mod diesel_basic_error_mapping;
mod diesel_comment_repository;
mod diesel_credential_repository;
mod diesel_post_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_credential_repository::DieselCredentialRepository;
pub use diesel_post_repository::DieselPostRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
