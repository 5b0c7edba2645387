//! Org routes under `/api/orgs`.

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
use crate::public::PublicOrg;
use crate::store::{NewOrg, DEFAULT_SEARCH_LIMIT};

/// Routes mounted under `/api/orgs`.
pub fn org_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create", post(create_org_handler))
        .route("/get", get(get_org_query).post(get_org_body))
        .route("/search", post(search_orgs_handler))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateOrgRequest {
    name: String,
    github_handle: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetOrgRequest {
    org_id: Uuid,
}

#[derive(Debug, Serialize)]
struct OrgResponse {
    org: PublicOrg,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchOrgsRequest {
    query: String,
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct OrgListResponse {
    orgs: Vec<PublicOrg>,
}

async fn create_org_handler(
    State(state): State<Arc<AppState>>,
    SessionAuth(ctx): SessionAuth,
    Json(request): Json<CreateOrgRequest>,
) -> ApiResult<Json<OrgResponse>> {
    let org = state.store.add_org(NewOrg {
        name: request.name,
        github_handle: request.github_handle,
        owner_account_id: ctx.account_id,
        is_personal_org: false,
    })?;
    Ok(Json(OrgResponse {
        org: PublicOrg::from(&org),
    }))
}

async fn get_org_query(
    State(state): State<Arc<AppState>>,
    Query(request): Query<GetOrgRequest>,
) -> ApiResult<Json<OrgResponse>> {
    get_org(&state, request)
}

async fn get_org_body(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GetOrgRequest>,
) -> ApiResult<Json<OrgResponse>> {
    get_org(&state, request)
}

fn get_org(state: &AppState, request: GetOrgRequest) -> ApiResult<Json<OrgResponse>> {
    let org = state
        .store
        .get_org_by_id(request.org_id)?
        .ok_or_else(|| ApiError::not_found("org_not_found", "Org not found"))?;
    Ok(Json(OrgResponse {
        org: PublicOrg::from(&org),
    }))
}

async fn search_orgs_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchOrgsRequest>,
) -> ApiResult<Json<OrgListResponse>> {
    let limit = request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let orgs = state.store.search_orgs(&request.query, limit)?;
    Ok(Json(OrgListResponse {
        orgs: orgs.iter().map(PublicOrg::from).collect(),
    }))
}
