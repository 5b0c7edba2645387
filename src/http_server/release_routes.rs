//! Package lineage routes: releases, builds, and deployments.
//!
//! Mounted under `/api/package_releases`, `/api/package_builds`, and
//! `/api/package_deployments` respectively.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth::SessionAuth;
use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use crate::public::{PublicPackageBuild, PublicPackageDeployment, PublicPackageRelease};

/// Routes mounted under `/api/package_releases`.
pub fn release_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create", post(create_release_handler))
        .route("/get", get(get_release_query).post(get_release_body))
        .route("/list", post(list_releases_handler))
        .with_state(state)
}

/// Routes mounted under `/api/package_builds`.
pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/list", post(list_builds_handler))
        .with_state(state)
}

/// Routes mounted under `/api/package_deployments`.
pub fn deployment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create", post(create_deployment_handler))
        .route("/get", get(get_deployment_query).post(get_deployment_body))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateReleaseRequest {
    package_id: Uuid,
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetReleaseRequest {
    package_release_id: Uuid,
}

#[derive(Debug, Serialize)]
struct ReleaseResponse {
    package_release: PublicPackageRelease,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListReleasesRequest {
    package_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
struct ReleaseListResponse {
    package_releases: Vec<PublicPackageRelease>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListBuildsRequest {
    package_release_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
struct BuildListResponse {
    package_builds: Vec<PublicPackageBuild>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateDeploymentRequest {
    package_release_id: Uuid,
    package_build_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetDeploymentRequest {
    package_deployment_id: Uuid,
}

#[derive(Debug, Serialize)]
struct DeploymentResponse {
    package_deployment: PublicPackageDeployment,
}

// ==================
// Handlers
// ==================

async fn create_release_handler(
    State(state): State<Arc<AppState>>,
    SessionAuth(_ctx): SessionAuth,
    Json(request): Json<CreateReleaseRequest>,
) -> ApiResult<Json<ReleaseResponse>> {
    if state.store.get_package_by_id(request.package_id)?.is_none() {
        return Err(ApiError::not_found("package_not_found", "Package not found"));
    }
    let version = request.version.unwrap_or_else(|| "0.0.1".to_string());
    let release = state
        .store
        .add_package_release(request.package_id, version)?;
    Ok(Json(ReleaseResponse {
        package_release: PublicPackageRelease::from(&release),
    }))
}

async fn get_release_query(
    State(state): State<Arc<AppState>>,
    Query(request): Query<GetReleaseRequest>,
) -> ApiResult<Json<ReleaseResponse>> {
    get_release(&state, request)
}

async fn get_release_body(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GetReleaseRequest>,
) -> ApiResult<Json<ReleaseResponse>> {
    get_release(&state, request)
}

fn get_release(state: &AppState, request: GetReleaseRequest) -> ApiResult<Json<ReleaseResponse>> {
    let release = state
        .store
        .get_package_release_by_id(request.package_release_id)?
        .ok_or_else(|| {
            ApiError::not_found("package_release_not_found", "Package release not found")
        })?;
    Ok(Json(ReleaseResponse {
        package_release: PublicPackageRelease::from(&release),
    }))
}

async fn list_releases_handler(
    State(state): State<Arc<AppState>>,
    request: Option<Json<ListReleasesRequest>>,
) -> ApiResult<Json<ReleaseListResponse>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let releases = state.store.list_package_releases(request.package_id)?;
    Ok(Json(ReleaseListResponse {
        package_releases: releases.iter().map(PublicPackageRelease::from).collect(),
    }))
}

async fn list_builds_handler(
    State(state): State<Arc<AppState>>,
    request: Option<Json<ListBuildsRequest>>,
) -> ApiResult<Json<BuildListResponse>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let builds = state
        .store
        .list_package_builds(request.package_release_id)?;
    Ok(Json(BuildListResponse {
        package_builds: builds.iter().map(PublicPackageBuild::from).collect(),
    }))
}

async fn create_deployment_handler(
    State(state): State<Arc<AppState>>,
    SessionAuth(_ctx): SessionAuth,
    Json(request): Json<CreateDeploymentRequest>,
) -> ApiResult<Json<DeploymentResponse>> {
    if state
        .store
        .get_package_release_by_id(request.package_release_id)?
        .is_none()
    {
        return Err(ApiError::not_found(
            "package_release_not_found",
            "Package release not found",
        ));
    }
    if state
        .store
        .get_package_build_by_id(request.package_build_id)?
        .is_none()
    {
        return Err(ApiError::not_found(
            "package_build_not_found",
            "Package build not found",
        ));
    }
    let deployment = state
        .store
        .add_package_deployment(request.package_release_id, request.package_build_id)?;
    Ok(Json(DeploymentResponse {
        package_deployment: PublicPackageDeployment::from(&deployment),
    }))
}

async fn get_deployment_query(
    State(state): State<Arc<AppState>>,
    Query(request): Query<GetDeploymentRequest>,
) -> ApiResult<Json<DeploymentResponse>> {
    get_deployment(&state, request)
}

async fn get_deployment_body(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GetDeploymentRequest>,
) -> ApiResult<Json<DeploymentResponse>> {
    get_deployment(&state, request)
}

fn get_deployment(
    state: &AppState,
    request: GetDeploymentRequest,
) -> ApiResult<Json<DeploymentResponse>> {
    let deployment = state
        .store
        .get_package_deployment_by_id(request.package_deployment_id)?
        .ok_or_else(|| {
            ApiError::not_found(
                "package_deployment_not_found",
                "Package deployment not found",
            )
        })?;
    Ok(Json(DeploymentResponse {
        package_deployment: PublicPackageDeployment::from(&deployment),
    }))
}
