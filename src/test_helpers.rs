/// Shared test helper functions for driving the router across the test suite
///
/// Every helper works against the public HTTP surface so tests exercise the
/// same code paths the website and admin UI use.
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Extract response body as JSON for testing
pub async fn extract_response_body(response: axum::response::Response) -> (StatusCode, Value) {
    use axum::body::to_bytes;

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body: Value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| json!({"error": "Invalid JSON response"}));
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    extract_response_body(response).await
}

pub async fn post_json(app: &Router, uri: &str, payload: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    extract_response_body(response).await
}

pub async fn put_json(app: &Router, uri: &str, payload: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    extract_response_body(response).await
}

pub async fn delete(app: &Router, uri: &str) -> StatusCode {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    response.status()
}

/// Create a project type and return its generated id
pub async fn create_test_project_type(app: &Router, type_key: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/project-types",
        &json!({
            "type_key": type_key,
            "description": format!("{type_key} events"),
            "display_order": 0
        }),
    )
    .await;

    assert_eq!(
        status,
        StatusCode::CREATED,
        "Failed to create test project type: {body:?}"
    );
    body["id"].as_str().unwrap().to_string()
}

/// Create a project with a two-image gallery and return its generated id
pub async fn create_test_project(app: &Router, title: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/projects",
        &json!({
            "title": title,
            "category": "conference",
            "summary": "Annual client conference",
            "description": "Two-day conference with keynotes and workshops",
            "year": 2025,
            "client": "Acme Corp",
            "display_order": 0,
            "is_active": true,
            "is_featured": false,
            "gallery": [
                {"url": "https://cdn.example.com/a.webp", "alt": "Main stage", "display_order": 0},
                {"url": "https://cdn.example.com/b.webp", "alt": "Networking area", "display_order": 1}
            ]
        }),
    )
    .await;

    assert_eq!(
        status,
        StatusCode::CREATED,
        "Failed to create test project: {body:?}"
    );
    body["id"].as_str().unwrap().to_string()
}
