//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::SearchService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search service for all business logic.
    pub search_service: Arc<SearchService>,
}
