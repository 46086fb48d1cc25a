//! Post handlers. Every route here sits behind the session guard.
//!
//! ```text
//! GET    /posts              list by category
//! GET    /posts/new          creation form
//! POST   /posts              create
//! GET    /posts/{id}         show with comments
//! GET    /posts/{id}/edit    edit form
//! PUT    /posts/{id}         update
//! DELETE /posts/{id}         delete
//! GET    /search?q=          substring search
//! ```

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::domain::{
    CategorizedPosts, Category, DomainError, Post, PostDetails, PostId, SearchQuery,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::forms::{ListParams, PostForm, SearchParams};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{Template, redirect_to, render};
use crate::middleware::AuthenticatedUser;

/// Banner shown on the list after a failed request.
pub const REQUEST_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

pub(crate) fn parse_post_id(raw: &str) -> Result<PostId, DomainError> {
    PostId::parse(raw).ok_or_else(|| DomainError::not_found(format!("post {raw} not found")))
}

fn category_labels() -> Vec<&'static str> {
    Category::ALL.into_iter().map(Category::label).collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexView<'a> {
    user: &'a str,
    categorized_posts: CategorizedPosts,
    error: Option<&'static str>,
}

#[derive(Serialize)]
struct FormView {
    categories: Vec<&'static str>,
}

#[derive(Serialize)]
struct ShowView {
    post: PostDetails,
}

#[derive(Serialize)]
struct EditView {
    post: Post,
    categories: Vec<&'static str>,
}

#[derive(Serialize)]
struct SearchView<'a> {
    query: &'a str,
    posts: Vec<Post>,
}

/// `GET /posts`
pub async fn index(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    params: web::Query<ListParams>,
) -> ApiResult<HttpResponse> {
    let categorized_posts = state.posts.categorized().await?;
    let error = params
        .error
        .as_deref()
        .filter(|flag| *flag == "request_failed")
        .map(|_| REQUEST_FAILED_MESSAGE);
    render(
        state.views.as_ref(),
        Template::Index,
        IndexView {
            user: user.email(),
            categorized_posts,
            error,
        },
    )
}

/// `GET /posts/new`
pub async fn new_form(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render(
        state.views.as_ref(),
        Template::New,
        FormView {
            categories: category_labels(),
        },
    )
}

/// `POST /posts`
pub async fn create(
    state: web::Data<HttpState>,
    form: web::Form<PostForm>,
) -> ApiResult<HttpResponse> {
    state.posts_command.create(form.into_inner().into()).await?;
    Ok(redirect_to("/posts"))
}

/// `GET /posts/{id}`
pub async fn show(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let post = state
        .posts
        .details(id)
        .await?
        .ok_or_else(|| DomainError::not_found(format!("post {id} not found")))?;
    render(state.views.as_ref(), Template::Show, ShowView { post })
}

/// `GET /posts/{id}/edit`
pub async fn edit_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let post = state
        .posts
        .find(id)
        .await?
        .ok_or_else(|| DomainError::not_found(format!("post {id} not found")))?;
    render(
        state.views.as_ref(),
        Template::Edit,
        EditView {
            post,
            categories: category_labels(),
        },
    )
}

/// `PUT /posts/{id}`
pub async fn update(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<PostForm>,
) -> ApiResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    state
        .posts_command
        .update(id, form.into_inner().into())
        .await?;
    Ok(redirect_to(format!("/posts/{id}")))
}

/// `DELETE /posts/{id}`
pub async fn delete(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    state.posts_command.delete(id).await?;
    Ok(redirect_to("/posts"))
}

/// `GET /search?q=`
pub async fn search(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<HttpResponse> {
    let query = SearchQuery::new(params.into_inner().q);
    let posts = state.posts.search(&query).await?;
    render(
        state.views.as_ref(),
        Template::Search,
        SearchView {
            query: query.as_str(),
            posts,
        },
    )
}

#[cfg(test)]
#[path = "posts_tests.rs"]
mod tests;
