//! Post domain service.
//!
//! Implements [`PostsQuery`] and [`PostsCommand`] over the content store.
//! Comment resolution for the detail view lives here so adapters only ever
//! hand back flat documents.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{CommentRepository, PostRepository, PostsCommand, PostsQuery};
use crate::domain::{
    CategorizedPosts, DomainError, Post, PostDetails, PostDraft, PostId, SearchQuery,
};

/// Post reads and writes over injected repositories.
#[derive(Clone)]
pub struct PostService<P, C> {
    posts: Arc<P>,
    comments: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<P, C> PostService<P, C> {
    /// Create a new post service.
    pub fn new(posts: Arc<P>, comments: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            posts,
            comments,
            clock,
        }
    }
}

#[async_trait]
impl<P, C> PostsQuery for PostService<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    async fn categorized(&self) -> Result<CategorizedPosts, DomainError> {
        let posts = self.posts.list().await?;
        Ok(CategorizedPosts::partition(posts))
    }

    async fn details(&self, id: PostId) -> Result<Option<PostDetails>, DomainError> {
        let Some(post) = self.posts.find(id).await? else {
            return Ok(None);
        };
        let comments = self.comments.find_many(post.comment_ids()).await?;
        if comments.len() < post.comment_ids().len() {
            debug!(
                post_id = %id,
                linked = post.comment_ids().len(),
                resolved = comments.len(),
                "skipping dangling comment references"
            );
        }
        Ok(Some(PostDetails::new(post, comments)))
    }

    async fn find(&self, id: PostId) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.find(id).await?)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.search(query).await?)
    }
}

#[async_trait]
impl<P, C> PostsCommand for PostService<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let post = Post::create(draft, self.clock.utc());
        self.posts.insert(&post).await?;
        debug!(post_id = %post.id(), "created post");
        Ok(post)
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<(), DomainError> {
        if !self.posts.update_fields(id, &draft).await? {
            debug!(post_id = %id, "update skipped: post not found");
        }
        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), DomainError> {
        if !self.posts.delete(id).await? {
            debug!(post_id = %id, "delete skipped: post not found");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "post_service_tests.rs"]
mod tests;
