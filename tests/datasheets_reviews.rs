//! Datasheet and AI review endpoint tests
//!
//! Exercises the pending-to-populated datasheet lifecycle and the
//! pending-to-completed AI review transition.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{assert_error, get, post, seeded_app};

#[tokio::test]
async fn test_new_datasheet_starts_unpopulated() {
    let (app, _) = seeded_app();
    let (status, body) = post(
        &app,
        "/api/datasheets/create",
        json!({"chip_name": "TestChip"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let datasheet = &body["datasheet"];
    assert_eq!(datasheet["chip_name"], "TestChip");
    assert!(datasheet["pin_information"].is_null());
    assert!(datasheet["datasheet_pdf_urls"].is_null());
    assert!(datasheet["ai_description"].is_null());
}

#[tokio::test]
async fn test_process_all_datasheets_populates_pending() {
    let (app, _) = seeded_app();
    let (_, created) = post(
        &app,
        "/api/datasheets/create",
        json!({"chip_name": "TestChip"}),
    )
    .await;
    let id = created["datasheet"]["datasheet_id"].as_str().unwrap().to_string();

    let (status, body) = post(
        &app,
        "/api/_fake/datasheets/process_all_datasheets",
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let (_, fetched) = post(&app, "/api/datasheets/get", json!({"datasheet_id": id})).await;
    let datasheet = &fetched["datasheet"];
    assert!(datasheet["pin_information"].is_array());
    assert!(datasheet["datasheet_pdf_urls"].is_array());
}

#[tokio::test]
async fn test_get_unknown_datasheet_is_404() {
    let (app, _) = seeded_app();
    let (status, body) = get(
        &app,
        "/api/datasheets/get?datasheet_id=88888888-8888-8888-8888-888888888888",
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "datasheet_not_found");
}

#[tokio::test]
async fn test_list_datasheets_filters() {
    let (app, _) = seeded_app();
    post(&app, "/api/datasheets/create", json!({"chip_name": "NE555"})).await;

    let (status, body) = post(&app, "/api/datasheets/list", json!({"is_popular": true})).await;
    assert_eq!(status, StatusCode::OK);
    let sheets = body["datasheets"].as_array().unwrap();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0]["chip_name"], "RP2040");

    let (_, body) = get(&app, "/api/datasheets/list?chip_name=NE555").await;
    let sheets = body["datasheets"].as_array().unwrap();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0]["chip_name"], "NE555");
}

#[tokio::test]
async fn test_ai_review_lifecycle() {
    let (app, _) = seeded_app();

    let (status, created) = post(&app, "/api/ai_reviews/create", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let review = &created["ai_review"];
    assert_eq!(review["display_status"], "pending");
    assert!(review["ai_review_text"].is_null());
    let id = review["ai_review_id"].as_str().unwrap().to_string();

    let (status, processed) = post(
        &app,
        "/api/_fake/ai_reviews/process_review",
        json!({"ai_review_id": id}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(processed["ai_review"]["display_status"], "completed");
    assert_eq!(processed["ai_review"]["ai_review_text"], "Placeholder AI Review");

    let (_, fetched) = get(&app, &format!("/api/ai_reviews/get?ai_review_id={id}")).await;
    assert_eq!(fetched["ai_review"]["display_status"], "completed");
    assert_eq!(fetched["ai_review"]["ai_review_text"], "Placeholder AI Review");
}

#[tokio::test]
async fn test_ai_review_create_checks_release_reference() {
    let (app, _) = seeded_app();
    let (status, body) = post(
        &app,
        "/api/ai_reviews/create",
        json!({"package_release_id": "99999999-9999-9999-9999-999999999999"}),
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "package_release_not_found");
}

#[tokio::test]
async fn test_ai_reviews_list_contains_created() {
    let (app, _) = seeded_app();
    let (_, created) = post(&app, "/api/ai_reviews/create", json!({})).await;
    let id = created["ai_review"]["ai_review_id"].as_str().unwrap();

    let (status, body) = get(&app, "/api/ai_reviews/list").await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body["ai_reviews"].as_array().unwrap();
    assert!(reviews.iter().any(|r| r["ai_review_id"] == id));
}
