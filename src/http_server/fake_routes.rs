//! Fake-control routes under `/api/_fake`.
//!
//! Test-only endpoints: store snapshot, reseed, and the synchronous
//! stand-ins for background processing. Each processing call is a single
//! deterministic state transition; there is no queue, retry, or backoff.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use crate::observability::Logger;
use crate::public::PublicAiReview;
use crate::store::StoreState;

/// Routes mounted under `/api/_fake`.
pub fn fake_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/db", get(db_snapshot_handler))
        .route("/seed", post(seed_handler))
        .route("/ai_reviews/process_review", post(process_review_handler))
        .route(
            "/datasheets/process_all_datasheets",
            post(process_all_datasheets_handler),
        )
        .route("/run_async_tasks", get(run_async_tasks_handler))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct OkResponse {
    ok: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProcessReviewRequest {
    ai_review_id: Uuid,
}

#[derive(Debug, Serialize)]
struct ProcessReviewResponse {
    ai_review: PublicAiReview,
}

/// Full store snapshot for diagnostics and test assertions.
async fn db_snapshot_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<StoreState>> {
    Ok(Json(state.store.snapshot()?))
}

/// Reset the store to the fixture data.
async fn seed_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<OkResponse>> {
    state.store.seed()?;
    Logger::info("STORE_SEEDED", &[]);
    Ok(Json(OkResponse { ok: true }))
}

/// Advance a pending AI review to completed.
async fn process_review_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProcessReviewRequest>,
) -> ApiResult<Json<ProcessReviewResponse>> {
    let review = state
        .store
        .complete_ai_review(request.ai_review_id)?
        .ok_or_else(|| ApiError::not_found("ai_review_not_found", "AI review not found"))?;
    Logger::info(
        "AI_REVIEW_PROCESSED",
        &[("ai_review_id", &review.ai_review_id.to_string())],
    );
    Ok(Json(ProcessReviewResponse {
        ai_review: PublicAiReview::from(&review),
    }))
}

/// Populate every datasheet still waiting for enrichment.
async fn process_all_datasheets_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<OkResponse>> {
    let count = state.store.process_pending_datasheets()?;
    Logger::info("DATASHEETS_PROCESSED", &[("count", &count.to_string())]);
    Ok(Json(OkResponse { ok: true }))
}

/// Catch-all async-task runner. Currently identical to datasheet
/// processing; kept as its own route because clients call it separately.
async fn run_async_tasks_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<OkResponse>> {
    let count = state.store.process_pending_datasheets()?;
    Logger::info("ASYNC_TASKS_RUN", &[("datasheets", &count.to_string())]);
    Ok(Json(OkResponse { ok: true }))
}
