//! HTTP inbound adapter: form-driven site handlers and their plumbing.

pub mod accounts;
pub mod comments;
pub mod error;
pub mod forms;
pub mod health;
pub mod posts;
pub mod routes;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

pub use error::ApiResult;
