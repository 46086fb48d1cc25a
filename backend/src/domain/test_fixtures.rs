//! Shared fixtures for domain service tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{Comment, CommentDraft, CommentId, Post, PostDraft, PostId, PostRecord};

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

pub(crate) fn draft(title: &str, category: &str) -> PostDraft {
    PostDraft {
        title: title.to_owned(),
        content: format!("{title} body"),
        image_url: "https://img.example/cover.png".to_owned(),
        category: category.to_owned(),
    }
}

pub(crate) fn post_with_comments(title: &str, comment_ids: Vec<CommentId>) -> Post {
    Post::restore(PostRecord {
        id: PostId::random(),
        draft: draft(title, "Travel"),
        comment_ids,
        created_at: fixture_timestamp(),
    })
}

pub(crate) fn comment_at(text: &str, minutes: i64) -> Comment {
    Comment::restore(
        CommentId::random(),
        CommentDraft {
            text: text.to_owned(),
            author: "ada".to_owned(),
        },
        fixture_timestamp() + chrono::Duration::minutes(minutes),
    )
}
