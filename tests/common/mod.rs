#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use trivia_api::db::queries::questions;
use trivia_api::server::app::{app_router, AppState};

/// Build the production router over a test pool so tests exercise the same
/// middleware stack (CORS, tracing, fallback) the binary serves.
pub fn build_test_app(pool: SqlitePool) -> Router {
    app_router(AppState::new(pool))
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn seed_question(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
    category: Option<i64>,
    difficulty: Option<i64>,
) -> i64 {
    questions::create_question(pool, Some(question), Some(answer), category, difficulty)
        .await
        .unwrap()
}

/// Assert the uniform error envelope: `{success: false, error, message}`.
pub fn assert_error_envelope(json: &serde_json::Value, code: u16, message: &str) {
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], code);
    assert_eq!(json["message"], message);
}
