//! Order quote routes.
//!
//! Batch creation lives under `/api/order_quote` (singular) and retrieval
//! under `/api/order_quotes`, mirroring the paths clients already call.

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
use crate::public::PublicOrderQuote;

/// Routes mounted under `/api/order_quote`.
pub fn order_quote_create_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create_all_vendor_quotes", post(create_all_vendor_quotes_handler))
        .with_state(state)
}

/// Routes mounted under `/api/order_quotes`.
pub fn order_quote_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/get", get(get_quote_query).post(get_quote_body))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateAllVendorQuotesRequest {
    package_release_id: Uuid,
}

#[derive(Debug, Serialize)]
struct CreateAllVendorQuotesResponse {
    order_quote_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetQuoteRequest {
    order_quote_id: Uuid,
}

#[derive(Debug, Serialize)]
struct QuoteResponse {
    order_quote: PublicOrderQuote,
}

/// Create one quote per fixed vendor for a release. The whole batch lands
/// in a single store write, so callers never observe a partial batch.
async fn create_all_vendor_quotes_handler(
    State(state): State<Arc<AppState>>,
    SessionAuth(ctx): SessionAuth,
    Json(request): Json<CreateAllVendorQuotesRequest>,
) -> ApiResult<Json<CreateAllVendorQuotesResponse>> {
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
    let quotes = state
        .store
        .add_vendor_quotes(ctx.account_id, request.package_release_id)?;
    Ok(Json(CreateAllVendorQuotesResponse {
        order_quote_ids: quotes
            .iter()
            .map(|q| q.order_quote_id.to_string())
            .collect(),
    }))
}

async fn get_quote_query(
    State(state): State<Arc<AppState>>,
    Query(request): Query<GetQuoteRequest>,
) -> ApiResult<Json<QuoteResponse>> {
    get_quote(&state, request)
}

async fn get_quote_body(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GetQuoteRequest>,
) -> ApiResult<Json<QuoteResponse>> {
    get_quote(&state, request)
}

fn get_quote(state: &AppState, request: GetQuoteRequest) -> ApiResult<Json<QuoteResponse>> {
    let quote = state
        .store
        .get_order_quote_by_id(request.order_quote_id)?
        .ok_or_else(|| ApiError::not_found("order_quote_not_found", "Order quote not found"))?;
    Ok(Json(QuoteResponse {
        order_quote: PublicOrderQuote::from(&quote),
    }))
}
