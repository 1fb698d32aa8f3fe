use crate::config::test_helpers::setup_test_app;
use crate::test_helpers::{
    create_test_project, create_test_project_type, delete, get, post_json, put_json,
};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_project_list_empty() {
    let app = setup_test_app().await;

    let (status, body) = get(&app, "/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([]),
        "Empty table should return an empty array, not an error"
    );
}

#[tokio::test]
async fn test_project_crud_operations() {
    let app = setup_test_app().await;

    let type_id = create_test_project_type(&app, "conference").await;

    // Create a project with a gallery and a project type
    let (status, body) = post_json(
        &app,
        "/api/projects",
        &json!({
            "title": "Summit 2025",
            "category": "conference",
            "summary": "Flagship summit",
            "description": "Three days, two stages",
            "year": 2025,
            "client": "Globex",
            "display_order": 1,
            "is_active": true,
            "is_featured": true,
            "project_type_id": type_id,
            "gallery": [
                {"url": "https://cdn.example.com/one.webp", "alt": "Opening", "display_order": 0},
                {"url": "https://cdn.example.com/two.webp", "alt": "Keynote", "display_order": 1}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "Failed to create project: {body:?}");
    let project_id = body["id"].as_str().expect("Response should include ID");
    assert!(!project_id.is_empty());

    // Read it back with gallery and type key embedded
    let (get_status, get_body) = get(&app, &format!("/api/projects/{project_id}")).await;
    assert_eq!(get_status, StatusCode::OK, "Failed to get project: {get_body:?}");
    assert_eq!(get_body["id"], project_id);
    assert_eq!(get_body["title"], "Summit 2025");
    assert_eq!(get_body["project_type_key"], "conference");

    let gallery = get_body["gallery"].as_array().expect("gallery should be an array");
    assert_eq!(gallery.len(), 2);
    assert_eq!(gallery[0]["url"], "https://cdn.example.com/one.webp");
    assert_eq!(gallery[1]["alt"], "Keynote");

    // Update the row: same id, no new row
    let (update_status, update_body) = put_json(
        &app,
        &format!("/api/projects/{project_id}"),
        &json!({
            "title": "Summit 2025 (updated)",
            "client": "Globex International"
        }),
    )
    .await;
    assert_eq!(
        update_status,
        StatusCode::OK,
        "Failed to update project: {update_body:?}"
    );
    assert_eq!(update_body["id"], project_id);

    let (list_status, list_body) = get(&app, "/api/projects").await;
    assert_eq!(list_status, StatusCode::OK);
    let items = list_body.as_array().unwrap();
    assert_eq!(items.len(), 1, "Update must not create a second row");
    assert_eq!(items[0]["title"], "Summit 2025 (updated)");

    // A payload without a gallery field leaves the existing set untouched
    let (get_status, get_body) = get(&app, &format!("/api/projects/{project_id}")).await;
    assert_eq!(get_status, StatusCode::OK);
    assert_eq!(get_body["gallery"].as_array().unwrap().len(), 2);

    // Delete the project
    let delete_status = delete(&app, &format!("/api/projects/{project_id}")).await;
    assert_eq!(delete_status, StatusCode::NO_CONTENT);

    let (_, list_body) = get(&app, "/api/projects").await;
    assert_eq!(list_body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_project_validation() {
    let app = setup_test_app().await;

    // Null title
    let (status, _body) = post_json(
        &app,
        "/api/projects",
        &json!({
            "title": null,
            "display_order": 0,
            "is_active": true,
            "is_featured": false
        }),
    )
    .await;
    assert!(status.is_client_error(), "Should reject project with null title");

    // Missing title entirely
    let (status, _body) = post_json(
        &app,
        "/api/projects",
        &json!({
            "display_order": 0,
            "is_active": true,
            "is_featured": false
        }),
    )
    .await;
    assert!(status.is_client_error(), "Should reject incomplete project data");

    // Neither attempt may leave a row behind
    let (_, list_body) = get(&app, "/api/projects").await;
    assert_eq!(list_body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_gallery_replaced_as_full_set() {
    let app = setup_test_app().await;
    let project_id = create_test_project(&app, "Gallery Replace").await;

    // Replace the two seeded images with a single new one
    let (status, body) = put_json(
        &app,
        &format!("/api/projects/{project_id}"),
        &json!({
            "gallery": [
                {"url": "https://cdn.example.com/new.webp", "alt": "Replacement", "display_order": 0}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "Gallery replace failed: {body:?}");

    let (_, get_body) = get(&app, &format!("/api/projects/{project_id}")).await;
    let gallery = get_body["gallery"].as_array().unwrap();
    assert_eq!(gallery.len(), 1, "Old gallery rows must be gone");
    assert_eq!(gallery[0]["url"], "https://cdn.example.com/new.webp");
}

#[tokio::test]
async fn test_gallery_cleared_with_empty_array() {
    let app = setup_test_app().await;
    let project_id = create_test_project(&app, "Gallery Clear").await;

    let (status, _) = put_json(
        &app,
        &format!("/api/projects/{project_id}"),
        &json!({ "gallery": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, get_body) = get(&app, &format!("/api/projects/{project_id}")).await;
    assert_eq!(
        get_body["gallery"].as_array().unwrap().len(),
        0,
        "An empty gallery array removes every prior row and adds none"
    );
}

#[tokio::test]
async fn test_duplicate_title_rejected() {
    let app = setup_test_app().await;
    create_test_project(&app, "Unique Title").await;

    let (status, _body) = post_json(
        &app,
        "/api/projects",
        &json!({
            "title": "Unique Title",
            "display_order": 0,
            "is_active": true,
            "is_featured": false
        }),
    )
    .await;
    assert!(!status.is_success(), "Duplicate title must not create a second row");

    let (_, list_body) = get(&app, "/api/projects").await;
    assert_eq!(list_body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_featured_projects_listing() {
    let app = setup_test_app().await;

    for (title, is_active, is_featured) in [
        ("Featured Live", true, true),
        ("Featured Hidden", false, true),
        ("Plain", true, false),
    ] {
        let (status, body) = post_json(
            &app,
            "/api/projects",
            &json!({
                "title": title,
                "display_order": 0,
                "is_active": is_active,
                "is_featured": is_featured
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "Failed to create {title}: {body:?}");
    }

    let (status, body) = get(&app, "/api/projects/featured").await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1, "Only active featured projects are listed");
    assert_eq!(items[0]["title"], "Featured Live");
}
