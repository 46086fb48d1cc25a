//! Port abstraction for comment documents in the content store.

use async_trait::async_trait;

use crate::domain::{Comment, CommentId, DomainError};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } => "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "comment repository query failed: {message}",
    }
}

impl From<CommentRepositoryError> for DomainError {
    fn from(error: CommentRepositoryError) -> Self {
        match error {
            CommentRepositoryError::Connection { message } => Self::service_unavailable(message),
            CommentRepositoryError::Query { message } => Self::internal(message),
        }
    }
}

/// Driven port for standalone comment documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a newly created comment.
    async fn insert(&self, comment: &Comment) -> Result<(), CommentRepositoryError>;

    /// Fetch a comment by id.
    async fn find(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Fetch every comment in `ids` that still exists. Order is unspecified.
    async fn find_many(&self, ids: &[CommentId]) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Overwrite a comment's text.
    async fn update_text(&self, id: CommentId, text: &str) -> Result<bool, CommentRepositoryError>;

    /// Remove a comment.
    async fn delete(&self, id: CommentId) -> Result<bool, CommentRepositoryError>;
}
