//! Driving port for comment use cases.

use async_trait::async_trait;

use crate::domain::{Comment, CommentDraft, CommentId, DomainError, PostId};

/// Comment creation, editing, and removal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentsCommand: Send + Sync {
    /// Create a comment and link it to `post_id`.
    ///
    /// Fails with `NotFound` when the parent post does not exist.
    async fn add(&self, post_id: PostId, draft: CommentDraft) -> Result<Comment, DomainError>;

    /// Fetch a comment by id regardless of its parent.
    async fn find(&self, id: CommentId) -> Result<Option<Comment>, DomainError>;

    /// Overwrite a comment's text. The parent post is not consulted.
    async fn update_text(&self, id: CommentId, text: String) -> Result<(), DomainError>;

    /// Delete a comment, then unlink it from `parent` when one is given and
    /// still exists.
    async fn delete(&self, id: CommentId, parent: Option<PostId>) -> Result<(), DomainError>;
}
