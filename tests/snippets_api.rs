//! Snippet endpoint tests

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{assert_error, get, post, post_auth, seeded_app};

#[tokio::test]
async fn test_create_snippet_belongs_to_caller() {
    let (app, _) = seeded_app();
    let (status, body) = post_auth(
        &app,
        "/api/snippets/create",
        json!({
            "unscoped_name": "voltage-divider",
            "code": "export default () => <resistor name=\"R1\" />",
            "snippet_type": "board",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snippet"]["owner_name"], "testuser");
    assert_eq!(body["snippet"]["name"], "testuser/voltage-divider");

    let id = body["snippet"]["snippet_id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/api/snippets/get?snippet_id={id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["snippet"]["snippet_type"], "board");
}

#[tokio::test]
async fn test_create_snippet_requires_session() {
    let (app, _) = seeded_app();
    let (status, body) = post(
        &app,
        "/api/snippets/create",
        json!({"code": "export default () => null", "snippet_type": "board"}),
    )
    .await;
    assert_error(status, &body, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_get_unknown_snippet_is_404() {
    let (app, _) = seeded_app();
    let (status, body) = post(
        &app,
        "/api/snippets/get",
        json!({"snippet_id": "cccccccc-cccc-cccc-cccc-cccccccccccc"}),
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "snippet_not_found");
}

#[tokio::test]
async fn test_list_latest_caps_at_twenty_most_recent_first() {
    let (app, _) = seeded_app();

    // Seed already holds 3 snippets; push the total well past the cap.
    for i in 0..22 {
        let (status, _) = post_auth(
            &app,
            "/api/snippets/create",
            json!({
                "unscoped_name": format!("snip-{i}"),
                "code": "export default () => null",
                "snippet_type": "package",
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get(&app, "/api/snippets/list_latest").await;
    assert_eq!(status, StatusCode::OK);
    let snippets = body["snippets"].as_array().unwrap();
    assert_eq!(snippets.len(), 20);
    assert_eq!(snippets[0]["unscoped_name"], "snip-21");
    assert_eq!(snippets[19]["unscoped_name"], "snip-2");
}
