//! Request-cycle tests for the enrollment API against an in-memory store

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use tuition_server::{build_router, db, AppState};

async fn test_app() -> Router {
    // A single pinned connection keeps the in-memory database alive
    // across requests
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    db::migrations::run(&pool).await.expect("migrations");
    build_router(AppState::new(pool, None))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn full_payload() -> Value {
    json!({
        "student_name": "Asha",
        "student_class": "10",
        "subjects": "Math,Physics",
        "area": "Downtown",
        "phone": "555-1234"
    })
}

#[tokio::test]
async fn home_reports_running() {
    let app = test_app().await;

    let response = app.oneshot(get("/")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["message"], "Tuition enrollment API is running");
}

#[tokio::test]
async fn create_echoes_fields_and_assigns_id() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json("/api/enroll", full_payload()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["student_name"], "Asha");
    assert_eq!(body["student_class"], "10");
    assert_eq!(body["subjects"], "Math,Physics");
    assert_eq!(body["area"], "Downtown");
    assert_eq!(body["phone"], "555-1234");
    assert_eq!(body["board"], Value::Null);
    assert_eq!(body["preferred_time"], Value::Null);
}

#[tokio::test]
async fn created_ids_are_distinct() {
    let app = test_app().await;

    let first = read_json(
        app.clone()
            .oneshot(post_json("/api/enroll", full_payload()))
            .await
            .expect("response"),
    )
    .await;
    let second = read_json(
        app.oneshot(post_json("/api/enroll", full_payload()))
            .await
            .expect("response"),
    )
    .await;

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn optional_fields_are_echoed_verbatim() {
    let app = test_app().await;

    let mut payload = full_payload();
    payload["board"] = json!("CBSE");
    payload["preferred_time"] = json!("weekday evenings");

    let response = app
        .oneshot(post_json("/api/enroll", payload))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(body["board"], "CBSE");
    assert_eq!(body["preferred_time"], "weekday evenings");
}

#[tokio::test]
async fn missing_required_fields_are_enumerated() {
    let app = test_app().await;

    // student_name present, phone blank, the rest absent
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/enroll",
            json!({"student_name": "Asha", "phone": ""}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["error"], "validation_error");
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .expect("fields array")
        .iter()
        .map(|f| f.as_str().expect("field name"))
        .collect();
    assert_eq!(fields, vec!["student_class", "subjects", "area", "phone"]);

    // Nothing was persisted
    let response = app.oneshot(get("/api/enrollments")).await.expect("response");
    let body = read_json(response).await;
    assert_eq!(body.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn list_returns_newest_first() {
    let app = test_app().await;

    for name in ["first", "second", "third"] {
        let mut payload = full_payload();
        payload["student_name"] = json!(name);

        let response = app
            .clone()
            .oneshot(post_json("/api/enroll", payload))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::CREATED);

        // Distinct created_at values for deterministic ordering
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let response = app.oneshot(get("/api/enrollments")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|e| e["student_name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn create_succeeds_without_smtp_config() {
    // The test state carries no mailer; the spawned notice must no-op
    // without affecting the response
    let app = test_app().await;

    let response = app
        .oneshot(post_json("/api/enroll", full_payload()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
}
