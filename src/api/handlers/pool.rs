//! Pool catalog handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::PoolListResponse;
use crate::app_state::AppState;

/// `GET /pools` — List the pool catalog.
///
/// Internal pool references are never included.
#[utoipa::path(
    get,
    path = "/api/v1/pools",
    tag = "Pools",
    summary = "List pools",
    description = "Returns every pool in the catalog with its region, category, and specializations, in catalog order.",
    responses(
        (status = 200, description = "Pool catalog", body = PoolListResponse),
    )
)]
pub async fn list_pools(State(state): State<AppState>) -> impl IntoResponse {
    Json(PoolListResponse::from(state.search_service.list_pools()))
}

/// Pool catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/pools", get(list_pools))
}
