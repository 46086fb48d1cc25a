//! View rendering seam.
//!
//! Handlers describe a page as a [`Template`] plus a serialisable context and
//! hand it to the injected [`ViewRenderer`]. The bundled [`JsonViewRenderer`]
//! emits the view model as JSON so a template engine can be plugged in
//! without touching handlers.

use actix_web::HttpResponse;
use actix_web::http::header::{ContentType, LOCATION};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::DomainError;

use super::ApiResult;

/// Pages the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Login,
    Register,
    Index,
    New,
    Show,
    Edit,
    Search,
    EditComment,
}

impl Template {
    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Index => "index",
            Self::New => "new",
            Self::Show => "show",
            Self::Edit => "edit",
            Self::Search => "search",
            Self::EditComment => "editComment",
        }
    }
}

/// A rendered page body and its content type.
#[derive(Debug, Clone)]
pub struct RenderedView {
    pub content_type: ContentType,
    pub body: String,
}

/// Turns a template and its context into a response body.
#[cfg_attr(test, mockall::automock)]
pub trait ViewRenderer: Send + Sync {
    fn render(&self, template: Template, context: &Value) -> Result<RenderedView, DomainError>;
}

/// Renders `{"template": ..., "context": ...}` as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonViewRenderer;

impl ViewRenderer for JsonViewRenderer {
    fn render(&self, template: Template, context: &Value) -> Result<RenderedView, DomainError> {
        let body = json!({ "template": template.name(), "context": context });
        Ok(RenderedView {
            content_type: ContentType::json(),
            body: body.to_string(),
        })
    }
}

/// Render `template` with `context` as a `200 OK` response.
pub fn render(
    renderer: &dyn ViewRenderer,
    template: Template,
    context: impl Serialize,
) -> ApiResult<HttpResponse> {
    let context = serde_json::to_value(context)
        .map_err(|err| DomainError::internal(format!("view context not serialisable: {err}")))?;
    let view = renderer.render(template, &context)?;
    Ok(HttpResponse::Ok()
        .content_type(view.content_type)
        .body(view.body))
}

/// `302 Found` to `location`.
pub fn redirect_to(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location.as_ref()))
        .finish()
}
