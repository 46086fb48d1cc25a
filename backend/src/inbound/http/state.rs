//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountCommand, CommentsCommand, PostsCommand, PostsQuery, SessionTokens,
};

use super::session::SessionCookieConfig;
use super::views::{JsonViewRenderer, ViewRenderer};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub accounts: Arc<dyn AccountCommand>,
    pub posts: Arc<dyn PostsQuery>,
    pub posts_command: Arc<dyn PostsCommand>,
    pub comments: Arc<dyn CommentsCommand>,
    pub tokens: Arc<dyn SessionTokens>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountCommand>,
    pub posts: Arc<dyn PostsQuery>,
    pub posts_command: Arc<dyn PostsCommand>,
    pub comments: Arc<dyn CommentsCommand>,
    pub tokens: Arc<dyn SessionTokens>,
    pub views: Arc<dyn ViewRenderer>,
    pub session_cookie: SessionCookieConfig,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports, Arc::new(JsonViewRenderer), SessionCookieConfig::default())
    }
}

impl HttpState {
    /// Construct state from ports, a renderer, and cookie settings.
    pub fn new(
        ports: HttpStatePorts,
        views: Arc<dyn ViewRenderer>,
        session_cookie: SessionCookieConfig,
    ) -> Self {
        let HttpStatePorts {
            accounts,
            posts,
            posts_command,
            comments,
            tokens,
        } = ports;
        Self {
            accounts,
            posts,
            posts_command,
            comments,
            tokens,
            views,
            session_cookie,
        }
    }
}
