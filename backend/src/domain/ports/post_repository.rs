//! Port abstraction for post documents in the content store.

use async_trait::async_trait;

use crate::domain::{CommentId, DomainError, Post, PostDraft, PostId, SearchQuery};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by post repository adapters.
    pub enum PostRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } => "post repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "post repository query failed: {message}",
    }
}

impl From<PostRepositoryError> for DomainError {
    fn from(error: PostRepositoryError) -> Self {
        match error {
            PostRepositoryError::Connection { message } => Self::service_unavailable(message),
            PostRepositoryError::Query { message } => Self::internal(message),
        }
    }
}

/// Driven port for reading and writing posts.
///
/// Mutations keyed by id report whether a post was affected so callers can
/// distinguish "missing" from success without a separate read.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every post in insertion order.
    async fn list(&self) -> Result<Vec<Post>, PostRepositoryError>;

    /// Fetch a post by id.
    async fn find(&self, id: PostId) -> Result<Option<Post>, PostRepositoryError>;

    /// Persist a newly created post.
    async fn insert(&self, post: &Post) -> Result<(), PostRepositoryError>;

    /// Overwrite the editable fields of a post.
    async fn update_fields(&self, id: PostId, draft: &PostDraft)
    -> Result<bool, PostRepositoryError>;

    /// Remove a post. Its comments are left in place.
    async fn delete(&self, id: PostId) -> Result<bool, PostRepositoryError>;

    /// Posts matching `query` in insertion order.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Post>, PostRepositoryError>;

    /// Atomically append a comment reference to a post's list.
    async fn link_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<bool, PostRepositoryError>;

    /// Atomically remove a comment reference from a post's list.
    async fn unlink_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<bool, PostRepositoryError>;
}
