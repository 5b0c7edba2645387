//! Session routes under `/api/sessions`.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth::{OptionalSessionAuth, SessionAuth};
use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use crate::public::PublicSession;

/// Routes mounted under `/api/sessions`.
pub fn session_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/delete",
            post(delete_session_handler).delete(delete_session_handler),
        )
        .route("/list", post(list_sessions_handler))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeleteSessionRequest {
    session_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
struct OkResponse {
    ok: bool,
}

#[derive(Debug, Serialize)]
struct SessionListResponse {
    sessions: Vec<PublicSession>,
}

/// Delete a session: the caller's own, or an explicit `session_id`.
async fn delete_session_handler(
    State(state): State<Arc<AppState>>,
    auth: OptionalSessionAuth,
    request: Option<Json<DeleteSessionRequest>>,
) -> ApiResult<Json<OkResponse>> {
    let explicit = request.and_then(|Json(r)| r.session_id);
    let session_id = explicit
        .or(auth.0.map(|ctx| ctx.session_id))
        .ok_or_else(ApiError::unauthorized)?;
    if state.store.delete_session(session_id)? {
        Ok(Json(OkResponse { ok: true }))
    } else {
        Err(ApiError::not_found("session_not_found", "Session not found"))
    }
}

async fn list_sessions_handler(
    State(state): State<Arc<AppState>>,
    SessionAuth(ctx): SessionAuth,
) -> ApiResult<Json<SessionListResponse>> {
    let sessions = state.store.list_sessions_for_account(ctx.account_id)?;
    Ok(Json(SessionListResponse {
        sessions: sessions.iter().map(PublicSession::from).collect(),
    }))
}
