//! Snippet routes under `/api/snippets`.

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
use crate::public::PublicSnippet;
use crate::store::{NewSnippet, SnippetType};

/// Cap on `list_latest` results.
const LATEST_SNIPPET_LIMIT: usize = 20;

/// Routes mounted under `/api/snippets`.
pub fn snippet_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create", post(create_snippet_handler))
        .route("/get", get(get_snippet_query).post(get_snippet_body))
        .route("/list_latest", get(list_latest_handler))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateSnippetRequest {
    unscoped_name: Option<String>,
    code: String,
    snippet_type: SnippetType,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetSnippetRequest {
    snippet_id: Uuid,
}

#[derive(Debug, Serialize)]
struct SnippetResponse {
    snippet: PublicSnippet,
}

#[derive(Debug, Serialize)]
struct SnippetListResponse {
    snippets: Vec<PublicSnippet>,
}

async fn create_snippet_handler(
    State(state): State<Arc<AppState>>,
    SessionAuth(ctx): SessionAuth,
    Json(request): Json<CreateSnippetRequest>,
) -> ApiResult<Json<SnippetResponse>> {
    let caller = state
        .store
        .get_account_by_id(ctx.account_id)?
        .ok_or_else(|| ApiError::not_found("account_not_found", "Account not found"))?;
    let unscoped_name = request.unscoped_name.unwrap_or_else(|| {
        format!("untitled-snippet-{}", &Uuid::new_v4().to_string()[..8])
    });
    let snippet = state.store.add_snippet(NewSnippet {
        unscoped_name,
        owner_name: caller.tscircuit_handle,
        code: request.code,
        snippet_type: request.snippet_type,
        description: request.description,
    })?;
    Ok(Json(SnippetResponse {
        snippet: PublicSnippet::from(&snippet),
    }))
}

async fn get_snippet_query(
    State(state): State<Arc<AppState>>,
    Query(request): Query<GetSnippetRequest>,
) -> ApiResult<Json<SnippetResponse>> {
    get_snippet(&state, request)
}

async fn get_snippet_body(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GetSnippetRequest>,
) -> ApiResult<Json<SnippetResponse>> {
    get_snippet(&state, request)
}

fn get_snippet(state: &AppState, request: GetSnippetRequest) -> ApiResult<Json<SnippetResponse>> {
    let snippet = state
        .store
        .get_snippet_by_id(request.snippet_id)?
        .ok_or_else(|| ApiError::not_found("snippet_not_found", "Snippet not found"))?;
    Ok(Json(SnippetResponse {
        snippet: PublicSnippet::from(&snippet),
    }))
}

/// The 20 most recently created snippets, newest first.
async fn list_latest_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SnippetListResponse>> {
    let snippets = state.store.list_latest_snippets(LATEST_SNIPPET_LIMIT)?;
    Ok(Json(SnippetListResponse {
        snippets: snippets.iter().map(PublicSnippet::from).collect(),
    }))
}
