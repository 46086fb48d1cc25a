//! Cookie session guard for the authenticated routes.
//!
//! [`RequireSession`] reads the `token` cookie, verifies it with the injected
//! [`SessionTokens`] codec, and stores the decoded identity in request
//! extensions. Requests without a valid token are redirected to the login
//! page before any handler runs.

use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::LOCATION;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::debug;

use crate::domain::ports::SessionTokens;
use crate::domain::{DomainError, SessionIdentity};

/// Name of the cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "token";

/// Where unauthenticated requests are sent.
pub const LOGIN_PATH: &str = "/";

/// Identity of the logged-in user, available to handlers behind
/// [`RequireSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(SessionIdentity);

impl AuthenticatedUser {
    pub fn email(&self) -> &str {
        self.0.email()
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = DomainError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(user.ok_or_else(|| DomainError::unauthorized("login required")))
    }
}

/// Middleware factory guarding a scope with the session cookie.
#[derive(Clone)]
pub struct RequireSession {
    tokens: Arc<dyn SessionTokens>,
}

impl RequireSession {
    pub fn new(tokens: Arc<dyn SessionTokens>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service,
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

/// Service wrapper produced by [`RequireSession`].
pub struct RequireSessionMiddleware<S> {
    service: S,
    tokens: Arc<dyn SessionTokens>,
}

impl<S> RequireSessionMiddleware<S> {
    fn identify(&self, req: &ServiceRequest) -> Option<SessionIdentity> {
        let Some(cookie) = req.cookie(SESSION_COOKIE) else {
            debug!(path = req.path(), "no session cookie");
            return None;
        };
        match self.tokens.verify(cookie.value()) {
            Ok(identity) => Some(identity),
            Err(error) => {
                debug!(path = req.path(), %error, "session cookie rejected");
                None
            }
        }
    }
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let Some(identity) = self.identify(&req) else {
            let redirect = HttpResponse::Found()
                .insert_header((LOCATION, LOGIN_PATH))
                .finish();
            let res = req.into_response(redirect).map_into_right_body();
            return Box::pin(ready(Ok(res)));
        };

        req.extensions_mut().insert(AuthenticatedUser(identity));
        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use actix_web::{App, web};
    use rstest::rstest;

    use crate::domain::ports::{MockSessionTokens, SessionTokenError};

    fn tokens() -> Arc<dyn SessionTokens> {
        let mut tokens = MockSessionTokens::new();
        tokens.expect_verify().returning(|token| {
            if token == "good" {
                Ok(SessionIdentity::new("ada@example.com"))
            } else {
                Err(SessionTokenError::invalid("bad signature"))
            }
        });
        Arc::new(tokens)
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.email().to_owned())
    }

    #[rstest]
    #[case(None)]
    #[case(Some("forged"))]
    #[actix_web::test]
    async fn rejects_missing_or_invalid_cookie(#[case] cookie: Option<&str>) {
        let app = actix_test::init_service(
            App::new().service(
                web::scope("/posts")
                    .wrap(RequireSession::new(tokens()))
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;
        let mut req = actix_test::TestRequest::get().uri("/posts");
        if let Some(value) = cookie {
            req = req.cookie(Cookie::new(SESSION_COOKIE, value));
        }

        let res = actix_test::call_service(&app, req.to_request()).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
            Some(LOGIN_PATH)
        );
    }

    #[actix_web::test]
    async fn valid_cookie_exposes_identity_to_handler() {
        let app = actix_test::init_service(
            App::new().service(
                web::scope("/posts")
                    .wrap(RequireSession::new(tokens()))
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;
        let req = actix_test::TestRequest::get()
            .uri("/posts")
            .cookie(Cookie::new(SESSION_COOKIE, "good"))
            .to_request();

        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        assert_eq!(body.as_ref(), b"ada@example.com");
    }
}
