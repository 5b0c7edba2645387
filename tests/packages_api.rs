//! Package, release, build, and deployment endpoint tests

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{assert_error, get, post, post_auth, seeded_app};

#[tokio::test]
async fn test_create_package_then_list_by_owner() {
    let (app, _) = seeded_app();

    let (status, created) = post_auth(
        &app,
        "/api/packages/create",
        json!({"name": "jane/macro-keypad", "description": "3x3 macro pad"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["package"]["owner_tscircuit_handle"], "jane");
    assert_eq!(created["package"]["name"], "jane/macro-keypad");
    assert_eq!(created["package"]["unscoped_name"], "macro-keypad");

    let (status, body) = post(
        &app,
        "/api/packages/list",
        json!({"owner_tscircuit_handle": "jane"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let packages = body["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0]["name"], "jane/macro-keypad");
}

#[tokio::test]
async fn test_list_packages_unmatched_owner_is_empty() {
    let (app, _) = seeded_app();
    let (status, body) = post(
        &app,
        "/api/packages/list",
        json!({"owner_tscircuit_handle": "nobody"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["packages"], json!([]));
}

#[tokio::test]
async fn test_create_package_defaults_owner_to_caller() {
    let (app, _) = seeded_app();
    let (status, created) = post_auth(
        &app,
        "/api/packages/create",
        json!({"unscoped_name": "bench-supply"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["package"]["name"], "testuser/bench-supply");
    assert_eq!(created["package"]["owner_tscircuit_handle"], "testuser");
}

#[tokio::test]
async fn test_create_package_requires_session_and_a_name() {
    let (app, _) = seeded_app();

    let (status, body) = post(
        &app,
        "/api/packages/create",
        json!({"unscoped_name": "anon-board"}),
    )
    .await;
    assert_error(status, &body, StatusCode::UNAUTHORIZED, "unauthorized");

    let (status, body) = post_auth(&app, "/api/packages/create", json!({})).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "invalid_package_name");
}

#[tokio::test]
async fn test_search_packages_case_insensitive() {
    let (app, _) = seeded_app();
    let (status, body) = post(&app, "/api/packages/search", json!({"query": "USB"})).await;
    assert_eq!(status, StatusCode::OK);
    let packages = body["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0]["name"], "boardmaker/usb-c-breakout");
}

#[tokio::test]
async fn test_get_package_by_name_and_unknown_id() {
    let (app, _) = seeded_app();

    let (status, body) = post(
        &app,
        "/api/packages/get",
        json!({"name": "boardmaker/usb-c-breakout"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["package"]["latest_package_release_id"].is_string());

    let (status, body) = post(
        &app,
        "/api/packages/get",
        json!({"package_id": "44444444-4444-4444-4444-444444444444"}),
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "package_not_found");

    let (status, body) = post(&app, "/api/packages/get", json!({})).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "invalid_request");
}

#[tokio::test]
async fn test_release_lifecycle() {
    let (app, _) = seeded_app();

    let (_, created) = post_auth(
        &app,
        "/api/packages/create",
        json!({"unscoped_name": "sensor-hub"}),
    )
    .await;
    let package_id = created["package"]["package_id"].as_str().unwrap().to_string();

    let (status, first) = post_auth(
        &app,
        "/api/package_releases/create",
        json!({"package_id": package_id}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["package_release"]["version"], "0.0.1");
    assert_eq!(first["package_release"]["is_latest"], true);

    let (status, second) = post_auth(
        &app,
        "/api/package_releases/create",
        json!({"package_id": package_id, "version": "0.0.2"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["package_release"]["is_latest"], true);

    // The first release lost its latest flag; the package points at the new one.
    let (_, listed) = post(
        &app,
        "/api/package_releases/list",
        json!({"package_id": package_id}),
    )
    .await;
    let releases = listed["package_releases"].as_array().unwrap();
    assert_eq!(releases.len(), 2);
    assert_eq!(releases[0]["is_latest"], false);
    assert_eq!(releases[1]["is_latest"], true);

    let (_, package) = post(
        &app,
        "/api/packages/get",
        json!({"package_id": package_id}),
    )
    .await;
    assert_eq!(
        package["package"]["latest_package_release_id"],
        second["package_release"]["package_release_id"]
    );
}

#[tokio::test]
async fn test_release_create_for_unknown_package_is_404() {
    let (app, _) = seeded_app();
    let (status, body) = post_auth(
        &app,
        "/api/package_releases/create",
        json!({"package_id": "55555555-5555-5555-5555-555555555555"}),
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "package_not_found");
}

#[tokio::test]
async fn test_builds_list_for_seeded_release() {
    let (app, _) = seeded_app();

    let (_, package) = post(
        &app,
        "/api/packages/get",
        json!({"name": "boardmaker/usb-c-breakout"}),
    )
    .await;
    let release_id = package["package"]["latest_package_release_id"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, release) = get(
        &app,
        &format!("/api/package_releases/get?package_release_id={release_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(release["package_release"]["version"], "0.1.0");

    let (status, body) = post(
        &app,
        "/api/package_builds/list",
        json!({"package_release_id": release_id}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let builds = body["package_builds"].as_array().unwrap();
    assert_eq!(builds.len(), 1);
    assert_eq!(builds[0]["transpiled"], true);
}

#[tokio::test]
async fn test_deployment_create_checks_references() {
    let (app, _) = seeded_app();

    let (_, package) = post(
        &app,
        "/api/packages/get",
        json!({"name": "boardmaker/usb-c-breakout"}),
    )
    .await;
    let release_id = package["package"]["latest_package_release_id"]
        .as_str()
        .unwrap()
        .to_string();
    let (_, builds) = post(
        &app,
        "/api/package_builds/list",
        json!({"package_release_id": release_id}),
    )
    .await;
    let build_id = builds["package_builds"][0]["package_build_id"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, body) = post_auth(
        &app,
        "/api/package_deployments/create",
        json!({
            "package_release_id": "66666666-6666-6666-6666-666666666666",
            "package_build_id": build_id,
        }),
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "package_release_not_found");

    let (status, body) = post_auth(
        &app,
        "/api/package_deployments/create",
        json!({
            "package_release_id": release_id,
            "package_build_id": "77777777-7777-7777-7777-777777777777",
        }),
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "package_build_not_found");

    let (status, created) = post_auth(
        &app,
        "/api/package_deployments/create",
        json!({
            "package_release_id": release_id,
            "package_build_id": build_id,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let deployment_id = created["package_deployment"]["package_deployment_id"]
        .as_str()
        .unwrap();

    let (status, fetched) = get(
        &app,
        &format!("/api/package_deployments/get?package_deployment_id={deployment_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fetched["package_deployment"]["package_build_id"],
        created["package_deployment"]["package_build_id"]
    );
}
