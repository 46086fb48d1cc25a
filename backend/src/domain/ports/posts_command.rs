//! Driving port for post mutations.

use async_trait::async_trait;

use crate::domain::{DomainError, Post, PostDraft, PostId};

/// Write-side use cases over posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsCommand: Send + Sync {
    /// Create a post with an empty comment list.
    async fn create(&self, draft: PostDraft) -> Result<Post, DomainError>;

    /// Overwrite the editable fields. Updating a missing post is a no-op.
    async fn update(&self, id: PostId, draft: PostDraft) -> Result<(), DomainError>;

    /// Delete a post, leaving its comments in place.
    async fn delete(&self, id: PostId) -> Result<(), DomainError>;
}
