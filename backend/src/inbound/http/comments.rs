//! Comment handlers, nested under a post. Session required.
//!
//! ```text
//! POST   /posts/{id}/comments
//! GET    /posts/{post_id}/comments/{comment_id}/edit
//! PUT    /posts/{post_id}/comments/{comment_id}
//! DELETE /posts/{post_id}/comments/{comment_id}
//! ```
//!
//! Comment edits are keyed by comment id alone; the `post_id` segment only
//! picks the redirect target. Redirects are built from the parsed post id,
//! falling back to `/posts` when the segment is not a post id.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::debug;

use crate::domain::{Comment, CommentId, PostId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::forms::{CommentForm, CommentTextForm};
use crate::inbound::http::posts::parse_post_id;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{Template, redirect_to, render};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditCommentView<'a> {
    comment: Comment,
    post_id: &'a str,
}

fn post_location(post_id: PostId) -> String {
    format!("/posts/{post_id}")
}

fn return_location(raw_post_id: &str) -> String {
    PostId::parse(raw_post_id).map_or_else(|| "/posts".to_owned(), post_location)
}

/// `POST /posts/{id}/comments`
pub async fn create(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<CommentForm>,
) -> ApiResult<HttpResponse> {
    let post_id = parse_post_id(&path)?;
    state
        .comments
        .add(post_id, form.into_inner().into())
        .await?;
    Ok(redirect_to(post_location(post_id)))
}

/// `GET /posts/{post_id}/comments/{comment_id}/edit`
pub async fn edit_form(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (post_id, raw_comment_id) = path.into_inner();
    let comment = match CommentId::parse(&raw_comment_id) {
        Some(id) => state.comments.find(id).await?,
        None => None,
    };
    let Some(comment) = comment else {
        debug!(comment_id = %raw_comment_id, "comment not found for edit");
        return Ok(redirect_to(return_location(&post_id)));
    };
    render(
        state.views.as_ref(),
        Template::EditComment,
        EditCommentView {
            comment,
            post_id: &post_id,
        },
    )
}

/// `PUT /posts/{post_id}/comments/{comment_id}`
pub async fn update(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    form: web::Form<CommentTextForm>,
) -> ApiResult<HttpResponse> {
    let (post_id, raw_comment_id) = path.into_inner();
    if let Some(id) = CommentId::parse(&raw_comment_id) {
        state
            .comments
            .update_text(id, form.into_inner().text)
            .await?;
    }
    Ok(redirect_to(return_location(&post_id)))
}

/// `DELETE /posts/{post_id}/comments/{comment_id}`
pub async fn delete(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (raw_post_id, raw_comment_id) = path.into_inner();
    if let Some(id) = CommentId::parse(&raw_comment_id) {
        state
            .comments
            .delete(id, PostId::parse(&raw_post_id))
            .await?;
    }
    Ok(redirect_to(return_location(&raw_post_id)))
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
