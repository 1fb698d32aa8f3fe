use crate::config::test_helpers::setup_test_app;
use crate::test_helpers::{delete, get, post_json, put_json};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_project_type_crud_operations() {
    let app = setup_test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/project-types",
        &json!({
            "type_key": "team_building",
            "description": "Team building programs",
            "display_order": 2
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create type: {body:?}");
    assert!(body["id"].is_string(), "Response should include generated id");
    assert_eq!(body["type_key"], "team_building");

    let type_id = body["id"].as_str().unwrap().to_string();

    let (update_status, update_body) = put_json(
        &app,
        &format!("/api/project-types/{type_id}"),
        &json!({ "description": "Outdoor and indoor team building" }),
    )
    .await;
    assert_eq!(update_status, StatusCode::OK, "{update_body:?}");
    assert_eq!(update_body["id"], type_id.as_str());

    let delete_status = delete(&app, &format!("/api/project-types/{type_id}")).await;
    assert_eq!(delete_status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_project_type_requires_type_key() {
    let app = setup_test_app().await;

    let (status, _body) = post_json(
        &app,
        "/api/project-types",
        &json!({ "description": "No key", "display_order": 0 }),
    )
    .await;
    assert!(
        status.is_client_error(),
        "Missing type_key must be rejected"
    );

    // The failed request must not leave a row behind
    let (list_status, list_body) = get(&app, "/api/project-types").await;
    assert_eq!(list_status, StatusCode::OK);
    assert_eq!(list_body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_project_type_duplicate_key_rejected() {
    let app = setup_test_app().await;

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let (status, _body) = post_json(
            &app,
            "/api/project-types",
            &json!({ "type_key": "csr", "display_order": 0 }),
        )
        .await;

        if expected == StatusCode::CREATED {
            assert_eq!(status, expected);
        } else {
            assert!(!status.is_success(), "Duplicate type_key must be rejected");
        }
    }

    let (_, list_body) = get(&app, "/api/project-types").await;
    assert_eq!(list_body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_project_types_listed_in_display_order() {
    let app = setup_test_app().await;

    for (key, order) in [("training", 3), ("csr", 1), ("conference", 2)] {
        let (status, body) = post_json(
            &app,
            "/api/project-types",
            &json!({ "type_key": key, "display_order": order }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body:?}");
    }

    let (status, body) = get(&app, "/api/project-types").await;
    assert_eq!(status, StatusCode::OK);

    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["type_key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["csr", "conference", "training"]);
}
