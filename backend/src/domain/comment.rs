//! Comment documents and their identifiers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Stable comment identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct CommentId(Uuid);

impl CommentId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, typically read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a path segment; malformed input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CommentId> for String {
    fn from(value: CommentId) -> Self {
        value.to_string()
    }
}

/// Caller-supplied comment fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub text: String,
    pub author: String,
}

/// A stored comment.
///
/// Comments exist independently of posts: a post references them by id, and
/// deleting a post leaves its comments in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    id: CommentId,
    text: String,
    author: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a fresh comment from a draft.
    pub fn create(draft: CommentDraft, created_at: DateTime<Utc>) -> Self {
        Self::restore(CommentId::random(), draft, created_at)
    }

    /// Rebuild a comment from stored parts.
    pub fn restore(id: CommentId, draft: CommentDraft, created_at: DateTime<Utc>) -> Self {
        let CommentDraft { text, author } = draft;
        Self {
            id,
            text,
            author,
            created_at,
        }
    }

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the text, leaving author and timestamps untouched.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
