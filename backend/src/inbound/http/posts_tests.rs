//! Tests for post handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;

use super::*;
use crate::domain::PostDraft;
use crate::inbound::http::test_utils::{location, memory_state, session_cookie, site, view_json};

const USER: &str = "ada@example.com";

fn post_form(title: &str, content: &str, category: &str) -> [(&'static str, String); 4] {
    [
        ("post[title]", title.to_owned()),
        ("post[content]", content.to_owned()),
        ("post[imageUrl]", "https://img.example/a.png".to_owned()),
        ("post[category]", category.to_owned()),
    ]
}

async fn seed(state: &HttpState, title: &str, category: &str) -> PostId {
    state
        .posts_command
        .create(PostDraft {
            title: title.to_owned(),
            content: format!("{title} body"),
            image_url: String::new(),
            category: category.to_owned(),
        })
        .await
        .expect("seed post")
        .id()
}

#[rstest]
#[case("/posts")]
#[case("/posts/new")]
#[case("/search?q=x")]
#[case("/posts/00000000-0000-0000-0000-000000000000")]
#[case("/posts/00000000-0000-0000-0000-000000000000/edit")]
#[actix_web::test]
async fn protected_routes_redirect_without_session(#[case] uri: &str) {
    let app = actix_test::init_service(site(memory_state())).await;
    let res =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/"));
}

#[actix_web::test]
async fn create_then_index_buckets_by_category() {
    let state = memory_state();
    let cookie = session_cookie(&state, USER);
    let app = actix_test::init_service(site(state)).await;

    for (title, category) in [("Lisbon", "Travel"), ("Cooking", "Food"), ("Denim", "Fashion")] {
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/posts")
                .cookie(cookie.clone())
                .set_form(post_form(title, "body", category))
                .to_request(),
        )
        .await;
        assert_eq!(location(&res).as_deref(), Some("/posts"));
    }

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/posts")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let view = view_json(res).await;
    let buckets = &view["context"]["categorizedPosts"];
    let order: Vec<&str> = buckets
        .as_object()
        .expect("bucket map")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(order, ["Travel", "Fashion", "Social Media", "Education"]);
    assert_eq!(view["template"], "index");
    assert_eq!(buckets["Travel"][0]["title"], "Lisbon");
    assert_eq!(buckets["Fashion"][0]["title"], "Denim");
    assert_eq!(buckets["Social Media"].as_array().map(Vec::len), Some(0));
    assert_eq!(view["context"]["user"], USER);
    assert!(view["context"]["error"].is_null());
}

#[actix_web::test]
async fn index_shows_banner_after_failed_request() {
    let state = memory_state();
    let cookie = session_cookie(&state, USER);
    let app = actix_test::init_service(site(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/posts?error=request_failed")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let view = view_json(res).await;
    assert_eq!(view["context"]["error"], REQUEST_FAILED_MESSAGE);
}

#[actix_web::test]
async fn new_form_lists_categories_in_order() {
    let state = memory_state();
    let cookie = session_cookie(&state, USER);
    let app = actix_test::init_service(site(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/posts/new")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let view = view_json(res).await;
    assert_eq!(view["template"], "new");
    assert_eq!(
        view["context"]["categories"],
        serde_json::json!(["Travel", "Fashion", "Social Media", "Education"])
    );
}

#[rstest]
#[case("/posts/not-a-uuid")]
#[case("/posts/00000000-0000-0000-0000-000000000000")]
#[case("/posts/00000000-0000-0000-0000-000000000000/edit")]
#[actix_web::test]
async fn unknown_posts_redirect_to_list(#[case] uri: &str) {
    let state = memory_state();
    let cookie = session_cookie(&state, USER);
    let app = actix_test::init_service(site(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(uri)
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/posts"));
}

#[actix_web::test]
async fn update_overwrites_fields_and_redirects_to_post() {
    let state = memory_state();
    let cookie = session_cookie(&state, USER);
    let id = seed(&state, "Draft", "Travel").await;
    let app = actix_test::init_service(site(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/posts/{id}"))
            .cookie(cookie.clone())
            .set_form(post_form("Final", "Rewritten", "Education"))
            .to_request(),
    )
    .await;
    assert_eq!(location(&res), Some(format!("/posts/{id}")));

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/posts/{id}/edit"))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let view = view_json(res).await;
    assert_eq!(view["template"], "edit");
    assert_eq!(view["context"]["post"]["title"], "Final");
    assert_eq!(view["context"]["post"]["category"], "Education");
}

#[actix_web::test]
async fn method_override_delete_removes_post() {
    let state = memory_state();
    let cookie = session_cookie(&state, USER);
    let id = seed(&state, "Doomed", "Travel").await;
    let posts = state.posts.clone();
    let app = actix_test::init_service(site(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/posts/{id}?_method=DELETE"))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(location(&res).as_deref(), Some("/posts"));
    assert!(posts.find(id).await.expect("lookup").is_none());
}

#[rstest]
#[case("social", 1)]
#[case("SOCIAL", 1)]
#[case("body", 2)]
#[case("", 2)]
#[case("nowhere", 0)]
#[actix_web::test]
async fn search_matches_any_field_case_insensitively(#[case] q: &str, #[case] hits: usize) {
    let state = memory_state();
    let cookie = session_cookie(&state, USER);
    seed(&state, "Lisbon", "Travel").await;
    seed(&state, "Feeds", "Social Media").await;
    let app = actix_test::init_service(site(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/search?q={q}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let view = view_json(res).await;
    assert_eq!(view["template"], "search");
    assert_eq!(view["context"]["query"], q);
    assert_eq!(view["context"]["posts"].as_array().map(Vec::len), Some(hits));
}

#[actix_web::test]
async fn search_without_query_matches_everything() {
    let state = memory_state();
    let cookie = session_cookie(&state, USER);
    seed(&state, "Lisbon", "Travel").await;
    let app = actix_test::init_service(site(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/search")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let view = view_json(res).await;
    assert_eq!(view["context"]["posts"].as_array().map(Vec::len), Some(1));
}
