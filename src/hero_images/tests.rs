use crate::config::test_helpers::setup_test_app;
use crate::test_helpers::{get, post_json, put_json};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_hero_image_crud_and_ordering() {
    let app = setup_test_app().await;

    for (url, order) in [
        ("https://cdn.example.com/hero-3.webp", 3),
        ("https://cdn.example.com/hero-1.webp", 1),
        ("https://cdn.example.com/hero-2.webp", 2),
    ] {
        let (status, body) = post_json(
            &app,
            "/api/hero-images",
            &json!({
                "url": url,
                "alt": "Banner",
                "is_active": true,
                "display_order": order
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body:?}");
    }

    let (status, body) = get(&app, "/api/hero-images").await;
    assert_eq!(status, StatusCode::OK);

    let urls: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["url"].as_str().unwrap())
        .collect();
    assert_eq!(
        urls,
        vec![
            "https://cdn.example.com/hero-1.webp",
            "https://cdn.example.com/hero-2.webp",
            "https://cdn.example.com/hero-3.webp"
        ]
    );
}

#[tokio::test]
async fn test_hero_image_toggle_active() {
    let app = setup_test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/hero-images",
        &json!({
            "url": "https://cdn.example.com/hero.webp",
            "is_active": true,
            "display_order": 0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = put_json(
        &app,
        &format!("/api/hero-images/{id}"),
        &json!({ "is_active": false }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body:?}");

    let (_, get_body) = get(&app, &format!("/api/hero-images/{id}")).await;
    assert_eq!(get_body["is_active"], false);
}
