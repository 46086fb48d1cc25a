//! Driving port for post reads.

use async_trait::async_trait;

use crate::domain::{CategorizedPosts, DomainError, Post, PostDetails, PostId, SearchQuery};

/// Read-side use cases over posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsQuery: Send + Sync {
    /// All posts grouped into the fixed category buckets.
    async fn categorized(&self) -> Result<CategorizedPosts, DomainError>;

    /// A post with its resolved comments, newest first.
    async fn details(&self, id: PostId) -> Result<Option<PostDetails>, DomainError>;

    /// A single post without comment resolution.
    async fn find(&self, id: PostId) -> Result<Option<Post>, DomainError>;

    /// Posts matching `query`, in insertion order.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Post>, DomainError>;
}
