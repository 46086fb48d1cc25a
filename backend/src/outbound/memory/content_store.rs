//! In-memory post and comment documents.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, PostRepository, PostRepositoryError,
};
use crate::domain::{Comment, CommentId, Post, PostDraft, PostId, SearchQuery};

/// Both content repositories over one pair of maps.
///
/// Posts are kept in insertion order so listings and search results match
/// the order a document store would return them in.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    posts: RwLock<Vec<Post>>,
    comments: RwLock<HashMap<CommentId, Comment>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryContentStore {
    async fn list(&self) -> Result<Vec<Post>, PostRepositoryError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find(&self, id: PostId) -> Result<Option<Post>, PostRepositoryError> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .find(|post| post.id() == id)
            .cloned())
    }

    async fn insert(&self, post: &Post) -> Result<(), PostRepositoryError> {
        self.posts.write().await.push(post.clone());
        Ok(())
    }

    async fn update_fields(
        &self,
        id: PostId,
        draft: &PostDraft,
    ) -> Result<bool, PostRepositoryError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|post| post.id() == id) else {
            return Ok(false);
        };
        post.apply(draft.clone());
        Ok(true)
    }

    async fn delete(&self, id: PostId) -> Result<bool, PostRepositoryError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|post| post.id() != id);
        Ok(posts.len() != before)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Post>, PostRepositoryError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|post| query.matches(post))
            .cloned()
            .collect())
    }

    async fn link_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<bool, PostRepositoryError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|post| post.id() == post_id) else {
            return Ok(false);
        };
        post.link_comment(comment_id);
        Ok(true)
    }

    async fn unlink_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<bool, PostRepositoryError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|post| post.id() == post_id) else {
            return Ok(false);
        };
        post.unlink_comment(comment_id);
        Ok(true)
    }
}

#[async_trait]
impl CommentRepository for InMemoryContentStore {
    async fn insert(&self, comment: &Comment) -> Result<(), CommentRepositoryError> {
        self.comments
            .write()
            .await
            .insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn find(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError> {
        Ok(self.comments.read().await.get(&id).cloned())
    }

    async fn find_many(&self, ids: &[CommentId]) -> Result<Vec<Comment>, CommentRepositoryError> {
        let comments = self.comments.read().await;
        Ok(ids.iter().filter_map(|id| comments.get(id).cloned()).collect())
    }

    async fn update_text(&self, id: CommentId, text: &str) -> Result<bool, CommentRepositoryError> {
        let mut comments = self.comments.write().await;
        let Some(comment) = comments.get_mut(&id) else {
            return Ok(false);
        };
        comment.set_text(text);
        Ok(true)
    }

    async fn delete(&self, id: CommentId) -> Result<bool, CommentRepositoryError> {
        Ok(self.comments.write().await.remove(&id).is_some())
    }
}
