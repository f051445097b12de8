//! Tests for general HTTP behaviour: the 404 fallback, CORS, and /metrics.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{assert_error_envelope, body_json, build_test_app, get};
use sqlx::SqlitePool;
use tower::ServiceExt;

#[sqlx::test]
async fn unknown_route_returns_the_json_not_found_envelope(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_error_envelope(&json, 404, "Question not found!");
}

#[sqlx::test]
async fn cors_preflight_allows_any_origin(pool: SqlitePool) {
    let app = build_test_app(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/questions")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("missing Access-Control-Allow-Origin"),
        "*"
    );

    let allow_methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .expect("missing Access-Control-Allow-Methods")
        .to_str()
        .unwrap();
    for method in ["GET", "PUT", "POST", "DELETE", "OPTIONS"] {
        assert!(
            allow_methods.contains(method),
            "Allow-Methods should contain {method}, got: {allow_methods}"
        );
    }
}

#[sqlx::test]
async fn simple_requests_carry_the_cors_header(pool: SqlitePool) {
    let app = build_test_app(pool);

    let request = Request::builder()
        .uri("/categories")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("missing Access-Control-Allow-Origin"),
        "*"
    );
}

#[sqlx::test]
async fn metrics_endpoint_serves_prometheus_text(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(app, "/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/plain"));
}
