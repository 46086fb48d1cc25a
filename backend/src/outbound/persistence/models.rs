//! Row types bridging Diesel tables and domain documents.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Comment, CommentDraft, CommentId, Post, PostDraft, PostId, PostRecord, User,
};

use super::schema::{comments, posts, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub email: String,
    pub password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.email, row.password_hash)
    }
}

/// Insertable struct for registering users. `created_at` uses the column
/// default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Row struct for reading from the posts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub category: String,
    pub comment_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post::restore(PostRecord {
            id: PostId::from_uuid(row.id),
            draft: PostDraft {
                title: row.title,
                content: row.content,
                image_url: row.image_url,
                category: row.category,
            },
            comment_ids: row.comment_ids.into_iter().map(CommentId::from_uuid).collect(),
            created_at: row.created_at,
        })
    }
}

/// Insertable struct for creating post records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub(crate) struct NewPostRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub content: &'a str,
    pub image_url: &'a str,
    pub category: &'a str,
    pub comment_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl<'a> From<&'a Post> for NewPostRow<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            id: *post.id().as_uuid(),
            title: post.title(),
            content: post.content(),
            image_url: post.image_url(),
            category: post.category(),
            comment_ids: post.comment_ids().iter().map(|id| *id.as_uuid()).collect(),
            created_at: post.created_at(),
        }
    }
}

/// Changeset for the four editable post fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = posts)]
pub(crate) struct PostFieldsUpdate<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub image_url: &'a str,
    pub category: &'a str,
}

impl<'a> From<&'a PostDraft> for PostFieldsUpdate<'a> {
    fn from(draft: &'a PostDraft) -> Self {
        Self {
            title: &draft.title,
            content: &draft.content,
            image_url: &draft.image_url,
            category: &draft.category,
        }
    }
}

/// Row struct for reading from the comments table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: Uuid,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment::restore(
            CommentId::from_uuid(row.id),
            CommentDraft {
                text: row.text,
                author: row.author,
            },
            row.created_at,
        )
    }
}

impl From<&Comment> for CommentRow {
    fn from(comment: &Comment) -> Self {
        Self {
            id: *comment.id().as_uuid(),
            text: comment.text().to_owned(),
            author: comment.author().to_owned(),
            created_at: comment.created_at(),
        }
    }
}
