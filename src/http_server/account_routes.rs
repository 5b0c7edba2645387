//! Account routes under `/api/accounts`.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth::OptionalSessionAuth;
use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use crate::public::PublicAccount;
use crate::store::DEFAULT_SEARCH_LIMIT;

/// Routes mounted under `/api/accounts`.
pub fn account_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/get", get(get_account_query).post(get_account_body))
        .route("/search", post(search_accounts_handler))
        .route(
            "/delete",
            post(delete_account_handler).delete(delete_account_handler),
        )
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetAccountRequest {
    account_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
struct AccountResponse {
    account: PublicAccount,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchAccountsRequest {
    query: String,
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct AccountListResponse {
    accounts: Vec<PublicAccount>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeleteAccountRequest {
    account_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
struct OkResponse {
    ok: bool,
}

// ==================
// Handlers
// ==================

async fn get_account_query(
    State(state): State<Arc<AppState>>,
    auth: OptionalSessionAuth,
    Query(request): Query<GetAccountRequest>,
) -> ApiResult<Json<AccountResponse>> {
    get_account(&state, auth, request)
}

async fn get_account_body(
    State(state): State<Arc<AppState>>,
    auth: OptionalSessionAuth,
    Json(request): Json<GetAccountRequest>,
) -> ApiResult<Json<AccountResponse>> {
    get_account(&state, auth, request)
}

/// Fetch an account by id, defaulting to the caller's own account.
fn get_account(
    state: &AppState,
    auth: OptionalSessionAuth,
    request: GetAccountRequest,
) -> ApiResult<Json<AccountResponse>> {
    let account_id = request
        .account_id
        .or(auth.0.map(|ctx| ctx.account_id))
        .ok_or_else(ApiError::unauthorized)?;
    let account = state
        .store
        .get_account_by_id(account_id)?
        .ok_or_else(|| ApiError::not_found("account_not_found", "Account not found"))?;
    Ok(Json(AccountResponse {
        account: PublicAccount::from(&account),
    }))
}

async fn search_accounts_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchAccountsRequest>,
) -> ApiResult<Json<AccountListResponse>> {
    let limit = request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let accounts = state.store.search_accounts(&request.query, limit)?;
    Ok(Json(AccountListResponse {
        accounts: accounts.iter().map(PublicAccount::from).collect(),
    }))
}

/// Delete an account: the caller's own, or an explicit `account_id`.
/// Repeating the delete keeps returning 404.
async fn delete_account_handler(
    State(state): State<Arc<AppState>>,
    auth: OptionalSessionAuth,
    request: Option<Json<DeleteAccountRequest>>,
) -> ApiResult<Json<OkResponse>> {
    let explicit = request.and_then(|Json(r)| r.account_id);
    let account_id = explicit
        .or(auth.0.map(|ctx| ctx.account_id))
        .ok_or_else(ApiError::unauthorized)?;
    if state.store.delete_account(account_id)? {
        Ok(Json(OkResponse { ok: true }))
    } else {
        Err(ApiError::not_found("account_not_found", "Account not found"))
    }
}
