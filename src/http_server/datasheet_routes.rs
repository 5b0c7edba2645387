//! Datasheet routes under `/api/datasheets`.
//!
//! Datasheets are created with only a chip name; enrichment happens later
//! through the fake async-processing endpoints.

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
use crate::public::PublicDatasheet;
use crate::store::DatasheetFilter;

/// Routes mounted under `/api/datasheets`.
pub fn datasheet_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/create", post(create_datasheet_handler))
        .route("/get", get(get_datasheet_query).post(get_datasheet_body))
        .route(
            "/list",
            get(list_datasheets_query).post(list_datasheets_body),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateDatasheetRequest {
    chip_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetDatasheetRequest {
    datasheet_id: Uuid,
}

#[derive(Debug, Serialize)]
struct DatasheetResponse {
    datasheet: PublicDatasheet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListDatasheetsRequest {
    chip_name: Option<String>,
    is_popular: Option<bool>,
}

#[derive(Debug, Serialize)]
struct DatasheetListResponse {
    datasheets: Vec<PublicDatasheet>,
}

async fn create_datasheet_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateDatasheetRequest>,
) -> ApiResult<Json<DatasheetResponse>> {
    let datasheet = state.store.add_datasheet(request.chip_name)?;
    Ok(Json(DatasheetResponse {
        datasheet: PublicDatasheet::from(&datasheet),
    }))
}

async fn get_datasheet_query(
    State(state): State<Arc<AppState>>,
    Query(request): Query<GetDatasheetRequest>,
) -> ApiResult<Json<DatasheetResponse>> {
    get_datasheet(&state, request)
}

async fn get_datasheet_body(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GetDatasheetRequest>,
) -> ApiResult<Json<DatasheetResponse>> {
    get_datasheet(&state, request)
}

fn get_datasheet(
    state: &AppState,
    request: GetDatasheetRequest,
) -> ApiResult<Json<DatasheetResponse>> {
    let datasheet = state
        .store
        .get_datasheet_by_id(request.datasheet_id)?
        .ok_or_else(|| ApiError::not_found("datasheet_not_found", "Datasheet not found"))?;
    Ok(Json(DatasheetResponse {
        datasheet: PublicDatasheet::from(&datasheet),
    }))
}

async fn list_datasheets_query(
    State(state): State<Arc<AppState>>,
    Query(request): Query<ListDatasheetsRequest>,
) -> ApiResult<Json<DatasheetListResponse>> {
    list_datasheets(&state, request)
}

async fn list_datasheets_body(
    State(state): State<Arc<AppState>>,
    request: Option<Json<ListDatasheetsRequest>>,
) -> ApiResult<Json<DatasheetListResponse>> {
    list_datasheets(&state, request.map(|Json(r)| r).unwrap_or_default())
}

fn list_datasheets(
    state: &AppState,
    request: ListDatasheetsRequest,
) -> ApiResult<Json<DatasheetListResponse>> {
    let datasheets = state.store.list_datasheets(&DatasheetFilter {
        chip_name: request.chip_name,
        is_popular: request.is_popular,
    })?;
    Ok(Json(DatasheetListResponse {
        datasheets: datasheets.iter().map(PublicDatasheet::from).collect(),
    }))
}
