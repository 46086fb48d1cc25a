//! Test helpers for inbound HTTP components.
//!
//! Builds the full route table over in-memory stores with the real domain
//! services, so handler tests exercise the same wiring as the server.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::LOCATION;
use actix_web::{App, test, web};
use serde_json::Value;

use crate::domain::test_fixtures::fixture_clock;
use crate::domain::{AccountService, CommentService, PostService, SessionIdentity};
use crate::inbound::http::routes;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::middleware::{MethodOverride, RequireSession, SESSION_COOKIE, Trace};
use crate::outbound::crypto::{BcryptPasswordHasher, JwtSessionTokens};
use crate::outbound::memory::{InMemoryContentStore, InMemoryCredentialRepository};

/// Signing secret used by every handler test.
pub const TEST_SECRET: &[u8] = b"handler-test-secret";

/// Test state backed by in-memory stores.
pub fn memory_state() -> HttpState {
    let users = Arc::new(InMemoryCredentialRepository::new());
    let content = Arc::new(InMemoryContentStore::new());
    let tokens = Arc::new(JwtSessionTokens::new(TEST_SECRET, fixture_clock()));
    let posts = Arc::new(PostService::new(
        Arc::clone(&content),
        Arc::clone(&content),
        fixture_clock(),
    ));
    HttpState::from(HttpStatePorts {
        accounts: Arc::new(AccountService::new(
            users,
            Arc::new(BcryptPasswordHasher::new(4)),
            Arc::clone(&tokens),
        )),
        posts: posts.clone(),
        posts_command: posts,
        comments: Arc::new(CommentService::new(
            Arc::clone(&content),
            content,
            fixture_clock(),
        )),
        tokens,
    })
}

/// The site over `state` with the production middleware stack.
pub fn site(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let guard = RequireSession::new(Arc::clone(&state.tokens));
    App::new()
        .app_data(web::Data::new(state))
        .wrap(MethodOverride)
        .wrap(Trace)
        .configure(move |cfg| routes::configure(cfg, guard))
}

/// Session cookie for `email`, signed with [`TEST_SECRET`].
pub fn session_cookie(state: &HttpState, email: &str) -> Cookie<'static> {
    let token = state
        .tokens
        .issue(&SessionIdentity::new(email))
        .expect("token issues");
    Cookie::new(SESSION_COOKIE, token)
}

/// `Location` header of a response, if any.
pub fn location<B>(res: &ServiceResponse<B>) -> Option<String> {
    res.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Parse a JSON view-model body.
pub async fn view_json<B: MessageBody>(res: ServiceResponse<B>) -> Value {
    let body = test::read_body(res).await;
    serde_json::from_slice(&body).expect("view model is JSON")
}

