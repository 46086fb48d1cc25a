//! Builders wiring adapters and domain services into [`HttpState`].

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use blog::domain::ports::{CommentRepository, CredentialRepository, PostRepository};
use blog::domain::{AccountService, CommentService, PostService};
use blog::inbound::http::session::SessionCookieConfig;
use blog::inbound::http::state::{HttpState, HttpStatePorts};
use blog::inbound::http::views::JsonViewRenderer;
use blog::outbound::crypto::{BcryptPasswordHasher, JwtSessionTokens};
use blog::outbound::memory::{InMemoryContentStore, InMemoryCredentialRepository};
use blog::outbound::persistence::{
    DieselCommentRepository, DieselCredentialRepository, DieselPostRepository,
};

use super::ServerConfig;

/// Driven adapters shared by the domain services.
struct Stores<U, P, C> {
    users: Arc<U>,
    posts: Arc<P>,
    comments: Arc<C>,
}

fn build_ports<U, P, C>(
    stores: Stores<U, P, C>,
    config: &ServerConfig,
    clock: &Arc<dyn Clock>,
) -> HttpStatePorts
where
    U: CredentialRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
{
    let Stores {
        users,
        posts,
        comments,
    } = stores;
    let tokens = Arc::new(JwtSessionTokens::new(
        &config.token_secret,
        Arc::clone(clock),
    ));
    let post_service = Arc::new(PostService::new(
        Arc::clone(&posts),
        Arc::clone(&comments),
        Arc::clone(clock),
    ));
    HttpStatePorts {
        accounts: Arc::new(AccountService::new(
            users,
            Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost)),
            Arc::clone(&tokens),
        )),
        posts: post_service.clone(),
        posts_command: post_service,
        comments: Arc::new(CommentService::new(posts, comments, Arc::clone(clock))),
        tokens,
    }
}

/// Build HTTP state using the Diesel adapters when a pool is configured,
/// otherwise in-memory stores.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let ports = match &config.db_pool {
        Some(pool) => build_ports(
            Stores {
                users: Arc::new(DieselCredentialRepository::new(pool.clone())),
                posts: Arc::new(DieselPostRepository::new(pool.clone())),
                comments: Arc::new(DieselCommentRepository::new(pool.clone())),
            },
            config,
            &clock,
        ),
        None => {
            let content = Arc::new(InMemoryContentStore::new());
            build_ports(
                Stores {
                    users: Arc::new(InMemoryCredentialRepository::new()),
                    posts: Arc::clone(&content),
                    comments: content,
                },
                config,
                &clock,
            )
        }
    };
    HttpState::new(
        ports,
        Arc::new(JsonViewRenderer),
        SessionCookieConfig::new(config.cookie_secure),
    )
}
