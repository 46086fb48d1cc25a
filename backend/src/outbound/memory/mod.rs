//! In-memory store adapters.
//!
//! Used when no database URL is configured and throughout the test suites.
//! State lives behind `tokio::sync::RwLock`; every port operation takes the
//! lock once, so each call is atomic with respect to the others.

mod content_store;
mod credential_store;

pub use content_store::InMemoryContentStore;
pub use credential_store::InMemoryCredentialRepository;
