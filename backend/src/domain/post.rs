//! Post documents, their identifiers, and the fields callers may edit.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{Category, Comment, CommentId};

/// Stable post identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct PostId(Uuid);

impl PostId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, typically read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a path segment; malformed input yields `None` so callers can
    /// treat it exactly like an unknown id.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PostId> for String {
    fn from(value: PostId) -> Self {
        value.to_string()
    }
}

/// The four caller-editable post fields.
///
/// `category` is free text; see [`Category::from_label`] for bucketing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub category: String,
}

/// A stored post and the ordered ids of its comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    id: PostId,
    title: String,
    content: String,
    image_url: String,
    category: String,
    comment_ids: Vec<CommentId>,
    created_at: DateTime<Utc>,
}

/// Raw parts used to rebuild a [`Post`] from storage.
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub id: PostId,
    pub draft: PostDraft,
    pub comment_ids: Vec<CommentId>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a post with an empty comment list.
    pub fn create(draft: PostDraft, created_at: DateTime<Utc>) -> Self {
        Self::restore(PostRecord {
            id: PostId::random(),
            draft,
            comment_ids: Vec::new(),
            created_at,
        })
    }

    /// Rebuild a post from stored parts.
    pub fn restore(record: PostRecord) -> Self {
        let PostRecord {
            id,
            draft:
                PostDraft {
                    title,
                    content,
                    image_url,
                    category,
                },
            comment_ids,
            created_at,
        } = record;
        Self {
            id,
            title,
            content,
            image_url,
            category,
            comment_ids,
            created_at,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn image_url(&self) -> &str {
        self.image_url.as_str()
    }

    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    pub fn comment_ids(&self) -> &[CommentId] {
        &self.comment_ids
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Bucket this post is listed under, if its category is recognised.
    pub fn bucket(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }

    /// Overwrite all four editable fields. Comments are untouched.
    pub fn apply(&mut self, draft: PostDraft) {
        let PostDraft {
            title,
            content,
            image_url,
            category,
        } = draft;
        self.title = title;
        self.content = content;
        self.image_url = image_url;
        self.category = category;
    }

    /// Append a comment reference at the end of the list.
    pub fn link_comment(&mut self, comment_id: CommentId) {
        self.comment_ids.push(comment_id);
    }

    /// Drop every reference to `comment_id`; returns whether any was removed.
    pub fn unlink_comment(&mut self, comment_id: CommentId) -> bool {
        let before = self.comment_ids.len();
        self.comment_ids.retain(|id| *id != comment_id);
        self.comment_ids.len() != before
    }
}

/// A post with its comments resolved, newest comment first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetails {
    #[serde(flatten)]
    post: Post,
    comments: Vec<Comment>,
}

impl PostDetails {
    /// Pair a post with its resolved comments, sorting them by creation time
    /// descending. Ties keep their link order.
    pub fn new(post: Post, mut comments: Vec<Comment>) -> Self {
        comments.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Self { post, comments }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}
