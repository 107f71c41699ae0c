//! System endpoints: health check and search limits.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::{DEFAULT_PAGE_LIMIT, EXPANSION_THRESHOLD, MAX_PAGE_LIMIT};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
    pool_count: usize,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, current timestamp, and catalog size.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            pool_count: state.search_service.registry().len(),
        }),
    )
}

/// Pagination and expansion limits applied to every search.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchLimits {
    default_limit: usize,
    max_limit: usize,
    expansion_threshold: usize,
}

/// `GET /config/search-limits` — Advertise search limits.
#[utoipa::path(
    get,
    path = "/config/search-limits",
    tag = "System",
    summary = "Search limits",
    description = "Returns the default page size, the page size ceiling, and the result count below which expansion is advised.",
    responses(
        (status = 200, description = "Search limits", body = SearchLimits),
    )
)]
pub async fn search_limits_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(SearchLimits {
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: MAX_PAGE_LIMIT,
            expansion_threshold: EXPANSION_THRESHOLD,
        }),
    )
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/search-limits", get(search_limits_handler))
}
