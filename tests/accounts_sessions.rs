//! Account and session endpoint tests
//!
//! Covers deletion semantics (404 with stable error codes, idempotent
//! repeats), search, and the session auth requirement.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{assert_error, get, post, post_auth, request, seeded_app};
use fakereg::store::SEED_SESSION_TOKEN;

#[tokio::test]
async fn test_get_account_defaults_to_caller() {
    let (app, _) = seeded_app();
    let (status, body) = post_auth(&app, "/api/accounts/get", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["account"]["tscircuit_handle"], "testuser");
    // Billing counters never leave the boundary.
    assert!(body["account"].get("balance_cents").is_none());
}

#[tokio::test]
async fn test_get_account_without_session_is_unauthorized() {
    let (app, _) = seeded_app();
    let (status, body) = post(&app, "/api/accounts/get", json!({})).await;
    assert_error(status, &body, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_search_accounts_is_case_insensitive() {
    let (app, _) = seeded_app();
    let (status, body) = post(&app, "/api/accounts/search", json!({"query": "TESTUSER"})).await;
    assert_eq!(status, StatusCode::OK);
    let accounts = body["accounts"].as_array().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0]["tscircuit_handle"], "testuser");
}

#[tokio::test]
async fn test_delete_account_then_repeat_is_404() {
    let (app, _) = seeded_app();

    let (status, body) = request(
        &app,
        Method::DELETE,
        "/api/accounts/delete",
        Some(SEED_SESSION_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    // The session still resolves; the account is gone. Repeats agree.
    for _ in 0..2 {
        let (status, body) = request(
            &app,
            Method::DELETE,
            "/api/accounts/delete",
            Some(SEED_SESSION_TOKEN),
            None,
        )
        .await;
        assert_error(status, &body, StatusCode::NOT_FOUND, "account_not_found");
    }
}

#[tokio::test]
async fn test_delete_unknown_account_by_id_is_404() {
    let (app, _) = seeded_app();
    let (status, body) = post_auth(
        &app,
        "/api/accounts/delete",
        json!({"account_id": "11111111-1111-1111-1111-111111111111"}),
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "account_not_found");
}

#[tokio::test]
async fn test_delete_session_then_token_stops_working() {
    let (app, _) = seeded_app();

    let (status, body) = post_auth(&app, "/api/sessions/delete", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    // With the session gone the token no longer authenticates.
    let (status, body) = post_auth(&app, "/api/sessions/delete", json!({})).await;
    assert_error(status, &body, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_delete_unknown_session_by_id_is_404_repeatedly() {
    let (app, _) = seeded_app();
    for _ in 0..2 {
        let (status, body) = post_auth(
            &app,
            "/api/sessions/delete",
            json!({"session_id": "22222222-2222-2222-2222-222222222222"}),
        )
        .await;
        assert_error(status, &body, StatusCode::NOT_FOUND, "session_not_found");
    }
}

#[tokio::test]
async fn test_list_sessions_returns_callers_sessions_without_tokens() {
    let (app, _) = seeded_app();
    let (status, body) = post_auth(&app, "/api/sessions/list", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let sessions = body["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].get("token").is_none());
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let (app, _) = seeded_app();
    let (status, body) = request(
        &app,
        Method::POST,
        "/api/sessions/list",
        Some("not-a-real-token"),
        Some(json!({})),
    )
    .await;
    assert_error(status, &body, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_org_search_and_get() {
    let (app, _) = seeded_app();
    let (status, body) = post(&app, "/api/orgs/search", json!({"query": "hardware"})).await;
    assert_eq!(status, StatusCode::OK);
    let orgs = body["orgs"].as_array().unwrap();
    assert_eq!(orgs.len(), 1);

    let org_id = orgs[0]["org_id"].as_str().unwrap();
    let (status, body) = get(&app, &format!("/api/orgs/get?org_id={org_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["org"]["name"], "open-hardware-collective");
}

#[tokio::test]
async fn test_org_get_unknown_is_404() {
    let (app, _) = seeded_app();
    let (status, body) = post(
        &app,
        "/api/orgs/get",
        json!({"org_id": "33333333-3333-3333-3333-333333333333"}),
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "org_not_found");
}

#[tokio::test]
async fn test_org_create_requires_session() {
    let (app, _) = seeded_app();
    let (status, body) = post(&app, "/api/orgs/create", json!({"name": "new-org"})).await;
    assert_error(status, &body, StatusCode::UNAUTHORIZED, "unauthorized");

    let (status, body) = post_auth(&app, "/api/orgs/create", json!({"name": "new-org"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["org"]["name"], "new-org");
    assert_eq!(body["org"]["is_personal_org"], false);
}
