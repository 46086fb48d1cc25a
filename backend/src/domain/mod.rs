//! Domain primitives, ports, and services.
//!
//! Purpose: define the blog's strongly typed entities and the use cases that
//! operate on them, independent of HTTP and storage. Inbound adapters call
//! the driving ports in [`ports`]; outbound adapters implement the driven
//! ones.
//!
//! Public surface:
//! - DomainError / ErrorCode: domain failure carried to the HTTP mapping.
//! - Credentials / SessionIdentity: login inputs and the token payload.
//! - Post / Comment / Category: content documents and the fixed buckets.
//! - CategorizedPosts / SearchQuery: read-side shaping for list and search.
//! - AccountService / PostService / CommentService: driving port
//!   implementations.

pub mod account_service;
pub mod auth;
pub mod category;
pub mod comment;
pub mod comment_service;
pub mod error;
pub mod listing;
pub mod ports;
pub mod post;
pub mod post_service;
pub mod trace_id;
pub mod user;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use self::account_service::{AccountService, INVALID_CREDENTIALS};
pub use self::auth::{Credentials, CredentialsValidationError, SessionIdentity};
pub use self::category::Category;
pub use self::comment::{Comment, CommentDraft, CommentId};
pub use self::comment_service::CommentService;
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::listing::{CategorizedPosts, SearchQuery};
pub use self::post::{Post, PostDetails, PostDraft, PostId, PostRecord};
pub use self::post_service::PostService;
pub use self::trace_id::TraceId;
pub use self::user::User;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use blog::domain::{ApiResult, DomainError};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(DomainError::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, DomainError>;
