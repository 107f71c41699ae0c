//! OpenAPI document for the gateway.

use utoipa::OpenApi;

use crate::api::dto::{PoolListResponse, SearchRequest, SearchResponse};
use crate::api::handlers::{pool, search, system};
use crate::domain::PoolSummary;
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI specification covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "talent-gateway",
        description = "Filtered, paginated talent-pool search with expansion advisories."
    ),
    paths(
        search::search_talent,
        pool::list_pools,
        system::health_handler,
        system::search_limits_handler,
    ),
    components(schemas(
        SearchRequest,
        SearchResponse,
        PoolListResponse,
        PoolSummary,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
        system::SearchLimits,
    )),
    tags(
        (name = "Search", description = "Talent search"),
        (name = "Pools", description = "Pool catalog"),
        (name = "System", description = "Health and configuration"),
    )
)]
pub struct ApiDoc;
