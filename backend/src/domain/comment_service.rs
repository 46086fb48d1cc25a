//! Comment domain service.
//!
//! Comments are standalone documents linked into their parent post by id.
//! Adding inserts the comment before linking it; deleting removes the
//! comment before unlinking it. Each link step is a single atomic update in
//! the store, so concurrent writers cannot lose each other's ids.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, warn};

use crate::domain::ports::{CommentRepository, CommentsCommand, PostRepository};
use crate::domain::{Comment, CommentDraft, CommentId, DomainError, PostId};

/// Comment use cases over injected repositories.
#[derive(Clone)]
pub struct CommentService<P, C> {
    posts: Arc<P>,
    comments: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<P, C> CommentService<P, C> {
    /// Create a new comment service.
    pub fn new(posts: Arc<P>, comments: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            posts,
            comments,
            clock,
        }
    }
}

#[async_trait]
impl<P, C> CommentsCommand for CommentService<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    async fn add(&self, post_id: PostId, draft: CommentDraft) -> Result<Comment, DomainError> {
        if self.posts.find(post_id).await?.is_none() {
            return Err(DomainError::not_found(format!("post {post_id} not found")));
        }

        let comment = Comment::create(draft, self.clock.utc());
        self.comments.insert(&comment).await?;
        if !self.posts.link_comment(post_id, comment.id()).await? {
            warn!(
                post_id = %post_id,
                comment_id = %comment.id(),
                "post vanished before comment was linked"
            );
            return Err(DomainError::not_found(format!("post {post_id} not found")));
        }
        debug!(post_id = %post_id, comment_id = %comment.id(), "added comment");
        Ok(comment)
    }

    async fn find(&self, id: CommentId) -> Result<Option<Comment>, DomainError> {
        Ok(self.comments.find(id).await?)
    }

    async fn update_text(&self, id: CommentId, text: String) -> Result<(), DomainError> {
        if !self.comments.update_text(id, &text).await? {
            debug!(comment_id = %id, "update skipped: comment not found");
        }
        Ok(())
    }

    async fn delete(&self, id: CommentId, parent: Option<PostId>) -> Result<(), DomainError> {
        self.comments.delete(id).await?;
        let Some(post_id) = parent else {
            return Ok(());
        };
        if !self.posts.unlink_comment(post_id, id).await? {
            debug!(post_id = %post_id, comment_id = %id, "unlink skipped: post not found");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "comment_service_tests.rs"]
mod tests;
