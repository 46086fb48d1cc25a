//! Login, registration, and logout handlers.
//!
//! ```text
//! GET  /           login page
//! POST /           email, password
//! GET  /register   registration page
//! POST /register   email, password
//! GET  /logout
//! ```

use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::{error, warn};

use crate::domain::{Credentials, ErrorCode};
use crate::inbound::http::ApiResult;
use crate::inbound::http::forms::CredentialsForm;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{Template, redirect_to, render};

/// Shown for unknown users and wrong passwords alike.
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid email or password";
/// Shown when the credential store cannot be reached.
pub const LOGIN_FAILED_MESSAGE: &str = "An error occurred";

#[derive(Debug, Default, Serialize)]
struct LoginView<'a> {
    error: Option<&'a str>,
}

fn render_login(state: &HttpState, error: Option<&str>) -> ApiResult<HttpResponse> {
    render(state.views.as_ref(), Template::Login, LoginView { error })
}

/// `GET /`
pub async fn login_page(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_login(&state, None)
}

/// `POST /`: authenticate and set the session cookie.
pub async fn login(
    state: web::Data<HttpState>,
    form: web::Form<CredentialsForm>,
) -> ApiResult<HttpResponse> {
    let Ok(credentials) = Credentials::try_from(form.into_inner()) else {
        return render_login(&state, Some(INVALID_LOGIN_MESSAGE));
    };

    match state.accounts.login(&credentials).await {
        Ok(session) => Ok(HttpResponse::Found()
            .insert_header((actix_web::http::header::LOCATION, "/posts"))
            .cookie(state.session_cookie.issue(session.token))
            .finish()),
        Err(err) if err.code() == ErrorCode::Unauthorized => {
            render_login(&state, Some(INVALID_LOGIN_MESSAGE))
        }
        Err(err) => {
            error!(code = ?err.code(), message = err.message(), "login failed");
            render_login(&state, Some(LOGIN_FAILED_MESSAGE))
        }
    }
}

/// `GET /register`
pub async fn register_page(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render(state.views.as_ref(), Template::Register, serde_json::json!({}))
}

/// `POST /register`: create the user, or bounce back to the form.
pub async fn register(
    state: web::Data<HttpState>,
    form: web::Form<CredentialsForm>,
) -> HttpResponse {
    let credentials = match Credentials::try_from(form.into_inner()) {
        Ok(credentials) => credentials,
        Err(err) => {
            warn!(error = %err, "registration rejected");
            return redirect_to("/register");
        }
    };

    match state.accounts.register(&credentials).await {
        Ok(()) => redirect_to("/"),
        Err(err) => {
            warn!(code = ?err.code(), message = err.message(), "registration failed");
            redirect_to("/register")
        }
    }
}

/// `GET /logout`: drop the session cookie.
pub async fn logout(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, "/"))
        .cookie(state.session_cookie.removal())
        .finish()
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
