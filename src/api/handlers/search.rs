//! Talent search handler.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{SearchRequest, SearchResponse};
use crate::app_state::AppState;
use crate::domain::SearchQuery;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /talent/search` — Search talent pools.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for a malformed body or missing
/// role/skills, [`GatewayError::InvalidPageToken`] for a bad continuation
/// token, and [`GatewayError::SourceFailure`] if candidates cannot be fetched.
#[utoipa::path(
    post,
    path = "/api/v1/talent/search",
    tag = "Search",
    summary = "Search talent pools",
    description = "Filters the pool catalog by region, category, and specializations, fetches candidates from every matching pool, and returns one page. `needs_expansion_confirmation` is set when fewer than three candidates matched and `progressive_search` is false.",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "One page of candidates", body = SearchResponse),
        (status = 400, description = "Missing role/skills or invalid page token", body = ErrorResponse),
        (status = 500, description = "Candidate source failure", body = ErrorResponse),
    )
)]
pub async fn search_talent(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "search body rejected");
        GatewayError::InvalidRequest(rejection.body_text())
    })?;

    let query = SearchQuery::try_from(req)?;
    let page = state.search_service.execute(&query).await?;

    Ok(Json(SearchResponse::from(page)))
}

/// Search routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/talent/search", post(search_talent))
}
