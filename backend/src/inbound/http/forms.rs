//! Form payloads accepted by the site.
//!
//! Bodies are `application/x-www-form-urlencoded`. Post and comment fields use
//! bracketed names (`post[title]`, `comment[text]`) as produced by the HTML
//! forms. Missing fields deserialise as empty strings.

use serde::Deserialize;

use crate::domain::{CommentDraft, Credentials, CredentialsValidationError, PostDraft};

/// Email/password form shared by login and registration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl TryFrom<CredentialsForm> for Credentials {
    type Error = CredentialsValidationError;

    fn try_from(form: CredentialsForm) -> Result<Self, Self::Error> {
        Self::try_from_parts(&form.email, &form.password)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(rename = "post[title]", default)]
    pub title: String,
    #[serde(rename = "post[content]", default)]
    pub content: String,
    #[serde(rename = "post[imageUrl]", default)]
    pub image_url: String,
    #[serde(rename = "post[category]", default)]
    pub category: String,
}

impl From<PostForm> for PostDraft {
    fn from(form: PostForm) -> Self {
        Self {
            title: form.title,
            content: form.content,
            image_url: form.image_url,
            category: form.category,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentForm {
    #[serde(rename = "comment[text]", default)]
    pub text: String,
    #[serde(rename = "comment[author]", default)]
    pub author: String,
}

impl From<CommentForm> for CommentDraft {
    fn from(form: CommentForm) -> Self {
        Self {
            text: form.text,
            author: form.author,
        }
    }
}

/// Comment edit form; only the text is editable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentTextForm {
    #[serde(rename = "comment[text]", default)]
    pub text: String,
}

/// `GET /search` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /posts` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub error: Option<String>,
}
