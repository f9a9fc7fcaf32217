//! HTTP API integration tests.
//!
//! Drives the axum router in-process and points the analyzer's upstream
//! fetches at a wiremock server.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stack_analyzer::{AcquirerConfig, StackAnalyzer};
use stack_analyzer_server::transport::{router, ServerState};

// ─────────────────────── helpers ───────────────────────

fn app(upstream: &MockServer) -> Router {
    let analyzer =
        StackAnalyzer::with_config(AcquirerConfig::default().with_raw_base_url(upstream.uri()));
    router(Arc::new(ServerState { analyzer }))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let json = serde_json::from_slice(&bytes).expect("body is JSON");
    (status, json)
}

async fn post_analyze(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn serve(server: &MockServer, at: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

// ─────────────────────── success ───────────────────────

#[tokio::test]
async fn test_analyze_repository_response_shape() {
    let upstream = MockServer::start().await;
    serve(
        &upstream,
        "/acme/demo/main/package.json",
        200,
        r#"{"dependencies":{"@supabase/supabase-js":"^2.39.0"}}"#,
    )
    .await;
    serve(&upstream, "/acme/demo/main/README.md", 200, "Pay with \"stripe\".").await;

    let (status, body) = post_analyze(
        app(&upstream),
        r#"{"url":"https://github.com/acme/demo"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "github");
    assert_eq!(body["totalSetupMinutes"], 45);
    assert!(body["textLength"].as_u64().unwrap() > 0);

    let matched = body["matched"].as_array().unwrap();
    let names: Vec<&str> = matched.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Supabase", "Stripe"]);
    assert_eq!(matched[0]["setup_time_minutes"], 15);
    assert_eq!(matched[0]["difficulty"], "beginner");
    assert!(matched[0]["docs_url"].as_str().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn test_zero_matches_is_success() {
    let upstream = MockServer::start().await;
    serve(&upstream, "/about", 200, "<h1>About us</h1><p>We like bikes.</p>").await;

    let body = format!(r#"{{"url":"{}/about"}}"#, upstream.uri());
    let (status, body) = post_analyze(app(&upstream), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "page");
    assert!(body["matched"].as_array().unwrap().is_empty());
    assert_eq!(body["totalSetupMinutes"], 0);
    assert!(body.get("error").is_none());
}

// ─────────────────────── failures ───────────────────────

#[tokio::test]
async fn test_invalid_url_is_bad_request_without_fetching() {
    let upstream = MockServer::start().await;

    let (status, body) = post_analyze(app(&upstream), r#"{"url":"not a url"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "Invalid URL" }));
    let requests = upstream.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_missing_url_field_is_invalid_url() {
    let upstream = MockServer::start().await;

    let (status, body) = post_analyze(app(&upstream), "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid URL");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let upstream = MockServer::start().await;

    let (status, body) = post_analyze(app(&upstream), "{\"url\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");

    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .body(Body::from(r#"{"url":"https://example.com"}"#))
        .unwrap();
    let (status, body) = send(app(&upstream), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn test_upstream_status_is_reported() {
    let upstream = MockServer::start().await;
    serve(&upstream, "/missing", 404, "nope").await;

    let body = format!(r#"{{"url":"{}/missing"}}"#, upstream.uri());
    let (status, body) = post_analyze(app(&upstream), &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Could not fetch page (HTTP 404)");
}

#[tokio::test]
async fn test_empty_repository_is_no_content() {
    let upstream = MockServer::start().await;

    let (status, body) = post_analyze(
        app(&upstream),
        r#"{"url":"https://github.com/acme/empty"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No content found at that URL");
}

// ─────────────────────── health ───────────────────────

#[tokio::test]
async fn test_health() {
    let upstream = MockServer::start().await;
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app(&upstream), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["components"].as_u64().unwrap() > 0);
}
