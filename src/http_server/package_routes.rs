//! Package routes under `/api/packages`.

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
use crate::public::PublicPackage;
use crate::store::{NewPackage, PackageFilter, DEFAULT_SEARCH_LIMIT};

/// Routes mounted under `/api/packages`.
pub fn package_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create", post(create_package_handler))
        .route("/get", get(get_package_query).post(get_package_body))
        .route("/list", post(list_packages_handler))
        .route("/search", post(search_packages_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreatePackageRequest {
    /// Full `owner/name`; the owner handle is taken from the prefix.
    name: Option<String>,
    /// Bare name; the owner defaults to the caller's handle.
    unscoped_name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    is_snippet: bool,
    #[serde(default)]
    is_private: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetPackageRequest {
    package_id: Option<Uuid>,
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct PackageResponse {
    package: PublicPackage,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListPackagesRequest {
    owner_tscircuit_handle: Option<String>,
    is_snippet: Option<bool>,
    creator_account_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchPackagesRequest {
    query: String,
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct PackageListResponse {
    packages: Vec<PublicPackage>,
}

// ==================
// Handlers
// ==================

async fn create_package_handler(
    State(state): State<Arc<AppState>>,
    SessionAuth(ctx): SessionAuth,
    Json(request): Json<CreatePackageRequest>,
) -> ApiResult<Json<PackageResponse>> {
    let caller = state
        .store
        .get_account_by_id(ctx.account_id)?
        .ok_or_else(|| ApiError::not_found("account_not_found", "Account not found"))?;

    // Owner comes from an explicit `owner/name` prefix, otherwise the
    // caller. No ownership check: this is a fixture, not an authorizer.
    let (owner, unscoped) = match (&request.name, &request.unscoped_name) {
        (Some(name), _) => match name.split_once('/') {
            Some((owner, unscoped)) => (owner.to_string(), unscoped.to_string()),
            None => (caller.tscircuit_handle.clone(), name.clone()),
        },
        (None, Some(unscoped)) => (caller.tscircuit_handle.clone(), unscoped.clone()),
        (None, None) => {
            return Err(ApiError::bad_request(
                "invalid_package_name",
                "Either name or unscoped_name is required",
            ))
        }
    };

    let package = state.store.add_package(NewPackage {
        name: format!("{}/{}", owner, unscoped),
        unscoped_name: unscoped,
        owner_tscircuit_handle: owner,
        description: request.description,
        creator_account_id: ctx.account_id,
        is_snippet: request.is_snippet,
        is_private: request.is_private,
    })?;
    Ok(Json(PackageResponse {
        package: PublicPackage::from(&package),
    }))
}

async fn get_package_query(
    State(state): State<Arc<AppState>>,
    Query(request): Query<GetPackageRequest>,
) -> ApiResult<Json<PackageResponse>> {
    get_package(&state, request)
}

async fn get_package_body(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GetPackageRequest>,
) -> ApiResult<Json<PackageResponse>> {
    get_package(&state, request)
}

fn get_package(state: &AppState, request: GetPackageRequest) -> ApiResult<Json<PackageResponse>> {
    let package = match (request.package_id, request.name.as_deref()) {
        (Some(id), _) => state.store.get_package_by_id(id)?,
        (None, Some(name)) => state.store.get_package_by_name(name)?,
        (None, None) => {
            return Err(ApiError::bad_request(
                "invalid_request",
                "Either package_id or name is required",
            ))
        }
    };
    let package = package
        .ok_or_else(|| ApiError::not_found("package_not_found", "Package not found"))?;
    Ok(Json(PackageResponse {
        package: PublicPackage::from(&package),
    }))
}

async fn list_packages_handler(
    State(state): State<Arc<AppState>>,
    request: Option<Json<ListPackagesRequest>>,
) -> ApiResult<Json<PackageListResponse>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let packages = state.store.list_packages(&PackageFilter {
        owner_tscircuit_handle: request.owner_tscircuit_handle,
        is_snippet: request.is_snippet,
        creator_account_id: request.creator_account_id,
    })?;
    Ok(Json(PackageListResponse {
        packages: packages.iter().map(PublicPackage::from).collect(),
    }))
}

async fn search_packages_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchPackagesRequest>,
) -> ApiResult<Json<PackageListResponse>> {
    let limit = request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let packages = state.store.search_packages(&request.query, limit)?;
    Ok(Json(PackageListResponse {
        packages: packages.iter().map(PublicPackage::from).collect(),
    }))
}
