//! AI review routes under `/api/ai_reviews`.
//!
//! Reviews are created pending and completed by the fake processing
//! endpoint under `/api/_fake/ai_reviews/process_review`.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use crate::public::PublicAiReview;

/// Routes mounted under `/api/ai_reviews`.
pub fn ai_review_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create", post(create_review_handler))
        .route("/get", get(get_review_query).post(get_review_body))
        .route("/list", get(list_reviews_handler).post(list_reviews_handler))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateReviewRequest {
    package_release_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetReviewRequest {
    ai_review_id: Uuid,
}

#[derive(Debug, Serialize)]
struct ReviewResponse {
    ai_review: PublicAiReview,
}

#[derive(Debug, Serialize)]
struct ReviewListResponse {
    ai_reviews: Vec<PublicAiReview>,
}

async fn create_review_handler(
    State(state): State<Arc<AppState>>,
    request: Option<Json<CreateReviewRequest>>,
) -> ApiResult<Json<ReviewResponse>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    if let Some(release_id) = request.package_release_id {
        if state
            .store
            .get_package_release_by_id(release_id)?
            .is_none()
        {
            return Err(ApiError::not_found(
                "package_release_not_found",
                "Package release not found",
            ));
        }
    }
    let review = state.store.add_ai_review(request.package_release_id)?;
    Ok(Json(ReviewResponse {
        ai_review: PublicAiReview::from(&review),
    }))
}

async fn get_review_query(
    State(state): State<Arc<AppState>>,
    Query(request): Query<GetReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    get_review(&state, request)
}

async fn get_review_body(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GetReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    get_review(&state, request)
}

fn get_review(state: &AppState, request: GetReviewRequest) -> ApiResult<Json<ReviewResponse>> {
    let review = state
        .store
        .get_ai_review_by_id(request.ai_review_id)?
        .ok_or_else(|| ApiError::not_found("ai_review_not_found", "AI review not found"))?;
    Ok(Json(ReviewResponse {
        ai_review: PublicAiReview::from(&review),
    }))
}

async fn list_reviews_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ReviewListResponse>> {
    let reviews = state.store.list_ai_reviews()?;
    Ok(Json(ReviewListResponse {
        ai_reviews: reviews.iter().map(PublicAiReview::from).collect(),
    }))
}
