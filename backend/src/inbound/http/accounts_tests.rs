//! Tests for login, registration, and logout handlers.

use actix_web::http::StatusCode;
use actix_web::http::header::SET_COOKIE;
use actix_web::test as actix_test;
use rstest::rstest;

use super::*;
use crate::domain::DomainError;
use crate::domain::ports::MockAccountCommand;
use crate::inbound::http::state::HttpStatePorts;
use crate::inbound::http::test_utils::{location, memory_state, site, view_json};

fn credentials_form(email: &str, password: &str) -> [(&'static str, String); 2] {
    [("email", email.to_owned()), ("password", password.to_owned())]
}

fn state_with_accounts(accounts: MockAccountCommand) -> HttpState {
    let base = memory_state();
    HttpState::from(HttpStatePorts {
        accounts: std::sync::Arc::new(accounts),
        posts: base.posts,
        posts_command: base.posts_command,
        comments: base.comments,
        tokens: base.tokens,
    })
}

#[actix_web::test]
async fn login_page_renders_login_template() {
    let app = actix_test::init_service(site(memory_state())).await;
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let view = view_json(res).await;
    assert_eq!(view["template"], "login");
    assert!(view["context"]["error"].is_null());
}

#[actix_web::test]
async fn register_then_login_sets_http_only_cookie() {
    let app = actix_test::init_service(site(memory_state())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_form(credentials_form("ada@example.com", "s3cret"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/"));

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/")
            .set_form(credentials_form("ada@example.com", "s3cret"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/posts"));
    let cookie = res
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .expect("session cookie set");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert!(!cookie.value().is_empty());
}

#[rstest]
#[case("ada@example.com", "wrong")]
#[case("nobody@example.com", "s3cret")]
#[case("", "s3cret")]
#[actix_web::test]
async fn bad_credentials_rerender_login_with_generic_message(
    #[case] email: &str,
    #[case] password: &str,
) {
    let app = actix_test::init_service(site(memory_state())).await;
    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_form(credentials_form("ada@example.com", "s3cret"))
            .to_request(),
    )
    .await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/")
            .set_form(credentials_form(email, password))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(SET_COOKIE).is_none());
    let view = view_json(res).await;
    assert_eq!(view["template"], "login");
    assert_eq!(view["context"]["error"], INVALID_LOGIN_MESSAGE);
}

#[actix_web::test]
async fn store_failure_during_login_shows_generic_error() {
    let mut accounts = MockAccountCommand::new();
    accounts
        .expect_login()
        .returning(|_| Err(DomainError::service_unavailable("credential store down")));
    let app = actix_test::init_service(site(state_with_accounts(accounts))).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/")
            .set_form(credentials_form("ada@example.com", "s3cret"))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let view = view_json(res).await;
    assert_eq!(view["context"]["error"], LOGIN_FAILED_MESSAGE);
}

#[rstest]
#[case("", "pw")]
#[case("ada@example.com", "")]
#[actix_web::test]
async fn blank_registration_fields_bounce_back(#[case] email: &str, #[case] password: &str) {
    let mut accounts = MockAccountCommand::new();
    accounts.expect_register().times(0);
    let app = actix_test::init_service(site(state_with_accounts(accounts))).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_form(credentials_form(email, password))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/register"));
}

#[actix_web::test]
async fn duplicate_registration_bounces_back() {
    let app = actix_test::init_service(site(memory_state())).await;
    for expected in ["/", "/register"] {
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/register")
                .set_form(credentials_form("ada@example.com", "s3cret"))
                .to_request(),
        )
        .await;
        assert_eq!(location(&res).as_deref(), Some(expected));
    }
}

#[actix_web::test]
async fn logout_expires_cookie_and_redirects_home() {
    let app = actix_test::init_service(site(memory_state())).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/logout").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/"));
    let cookie = res
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .expect("removal cookie set");
    assert!(cookie.value().is_empty());
}
