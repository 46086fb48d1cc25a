//! Form method override.
//!
//! HTML forms can only submit `GET` and `POST`. A `POST` whose query string
//! carries `_method=PUT`, `_method=PATCH`, or `_method=DELETE` is rewritten to
//! that verb before routing. Any other value leaves the request untouched.
//!
//! Wrap the whole `App` so the rewrite happens before route matching.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::web::Query;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::Method;
use futures_util::future::{Ready, ready};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct OverrideQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

fn override_target(query: &str) -> Option<Method> {
    let requested = Query::<OverrideQuery>::from_query(query).ok()?.into_inner().method?;
    match requested.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

#[derive(Clone, Copy, Default)]
pub struct MethodOverride;

impl<S, B> Transform<S, ServiceRequest> for MethodOverride
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MethodOverrideMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MethodOverrideMiddleware { service }))
    }
}

/// Service wrapper produced by [`MethodOverride`].
pub struct MethodOverrideMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if req.method() == Method::POST {
            if let Some(method) = override_target(req.query_string()) {
                debug!(path = req.path(), %method, "method override");
                req.head_mut().method = method;
            }
        }
        self.service.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use actix_web::{App, HttpRequest, HttpResponse, web};
    use rstest::rstest;

    #[rstest]
    #[case("_method=DELETE", Some(Method::DELETE))]
    #[case("_method=put", Some(Method::PUT))]
    #[case("_method=PATCH&x=1", Some(Method::PATCH))]
    #[case("_method=GET", None)]
    #[case("_method=", None)]
    #[case("other=DELETE", None)]
    #[case("", None)]
    fn override_target_accepts_only_mutating_verbs(
        #[case] query: &str,
        #[case] expected: Option<Method>,
    ) {
        assert_eq!(override_target(query), expected);
    }

    async fn echo_method(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().body(req.method().to_string())
    }

    #[rstest]
    #[case(Method::POST, "/item?_method=DELETE", "DELETE")]
    #[case(Method::POST, "/item", "POST")]
    #[case(Method::GET, "/item?_method=DELETE", "GET")]
    #[actix_web::test]
    async fn rewrites_post_before_routing(
        #[case] method: Method,
        #[case] uri: &str,
        #[case] expected: &str,
    ) {
        let app = actix_test::init_service(
            App::new()
                .wrap(MethodOverride)
                .route("/item", web::to(echo_method)),
        )
        .await;
        let req = actix_test::TestRequest::default()
            .method(method)
            .uri(uri)
            .to_request();

        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        assert_eq!(body.as_ref(), expected.as_bytes());
    }
}
