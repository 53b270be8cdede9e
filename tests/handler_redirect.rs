mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use shortener_core::api::handlers::redirect_handler;
use shortener_core::application::services::RedirectKind;

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state(RedirectKind::Temporary);
    let code = common::seed_link(&state, "https://example.com/a").await;

    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get(&format!("/{}", code)).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/a");
}

#[tokio::test]
async fn test_redirect_found_when_configured() {
    let state = common::create_test_state(RedirectKind::Found);
    let code = common::seed_link(&state, "https://example.com/a").await;
    let server = common::test_server(state);

    let response = server.get(&format!("/{}", code)).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/a");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::test_server(common::create_test_state(RedirectKind::Temporary));

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["code"], "doesnotexist");
}

#[tokio::test]
async fn test_redirect_malformed_code() {
    let server = common::test_server(common::create_test_state(RedirectKind::Temporary));

    let response = server.get("/bad.code").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_preserves_query_and_fragment() {
    let state = common::create_test_state(RedirectKind::Temporary);
    let url = "https://example.com/search?q=rust&page=2#results";
    let code = common::seed_link(&state, url).await;
    let server = common::test_server(state);

    let response = server.get(&format!("/{}", code)).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), url);
}

#[tokio::test]
async fn test_redirect_non_ascii_url() {
    let state = common::create_test_state(RedirectKind::Temporary);
    let code = common::seed_link(&state, "https://example.com/straße").await;
    let server = common::test_server(state);

    let response = server.get(&format!("/{}", code)).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/stra%C3%9Fe");
}

#[tokio::test]
async fn test_every_issued_code_redirects() {
    let state = common::create_test_state(RedirectKind::Temporary);
    let mut seeded = Vec::new();
    for i in 0..20 {
        let url = format!("https://example.com/page/{}", i);
        let code = common::seed_link(&state, &url).await;
        seeded.push((code, url));
    }
    let server = common::test_server(state);

    for (code, url) in seeded {
        let response = server.get(&format!("/{}", code)).await;
        response.assert_status(StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.header("location"), url.as_str());
    }
}
