//! Search service: runs the filter → fetch → paginate → advise pipeline.

use std::sync::Arc;

use futures_util::future::try_join_all;

use crate::domain::{
    Cursor, Page, PoolRegistry, PoolSummary, SearchQuery, filter_pools, needs_expansion,
};
use crate::error::GatewayError;
use crate::source::{CandidateRecord, ResultSource};

/// Orchestration layer for talent searches.
///
/// Stateless coordinator: owns a shared read-only [`PoolRegistry`] and the
/// injected [`ResultSource`]. Every search follows the same linear flow:
/// validate → decode cursor → filter pools → fetch candidates per pool →
/// slice a page → compute the expansion advisory.
#[derive(Debug, Clone)]
pub struct SearchService {
    registry: Arc<PoolRegistry>,
    source: Arc<dyn ResultSource>,
    candidates_per_pool: usize,
}

impl SearchService {
    /// Creates a new `SearchService`.
    ///
    /// `candidates_per_pool` is the count requested from the result source
    /// for each matching pool.
    #[must_use]
    pub fn new(
        registry: Arc<PoolRegistry>,
        source: Arc<dyn ResultSource>,
        candidates_per_pool: usize,
    ) -> Self {
        Self {
            registry,
            source,
            candidates_per_pool,
        }
    }

    /// Returns a reference to the inner [`PoolRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<PoolRegistry> {
        &self.registry
    }

    /// Returns client-safe summaries of every pool in catalog order.
    #[must_use]
    pub fn list_pools(&self) -> Vec<PoolSummary> {
        self.registry.lookup().iter().map(PoolSummary::from).collect()
    }

    /// Executes a search and returns one page of candidate records.
    ///
    /// Result sources are queried concurrently, one call per matching pool;
    /// records are flattened in catalog order regardless of completion order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if the role is blank or the
    /// limit is zero,
    /// [`GatewayError::InvalidPageToken`] if the continuation token is
    /// malformed, and [`GatewayError::SourceFailure`] if any result source
    /// call fails. No partial page is returned on error.
    pub async fn execute(&self, query: &SearchQuery) -> Result<Page<CandidateRecord>, GatewayError> {
        if query.role.trim().is_empty() {
            tracing::warn!("search rejected: blank role");
            return Err(GatewayError::InvalidRequest("role is required".to_string()));
        }
        if query.limit == 0 {
            tracing::warn!("search rejected: zero limit");
            return Err(GatewayError::InvalidRequest(
                "limit must be at least 1".to_string(),
            ));
        }

        let cursor = Cursor::from_token(query.next_page_token.as_deref()).inspect_err(|e| {
            tracing::warn!(error = %e, "search rejected: bad page token");
        })?;

        let matched = filter_pools(self.registry.lookup(), query);
        tracing::debug!(
            role = %query.role,
            region = ?query.region,
            category = ?query.category,
            specializations = ?query.specializations,
            matched_pools = matched.len(),
            "pools filtered"
        );

        let batches = try_join_all(
            matched
                .iter()
                .map(|pool| self.source.generate(pool, self.candidates_per_pool, &query.hints)),
        )
        .await
        .inspect_err(|e| {
            tracing::error!(pool_id = %e.pool_id, reason = %e.reason, "result source failed");
        })?;

        let records: Vec<CandidateRecord> = batches.into_iter().flatten().collect();
        let page = Page::slice(records, cursor, query.page_size());
        let expand = needs_expansion(page.total, query.progressive_search);

        tracing::info!(
            role = %query.role,
            offset = cursor.offset(),
            total = page.total,
            returned = page.results.len(),
            has_next = page.next.is_some(),
            needs_expansion = expand,
            "search completed"
        );

        Ok(page.with_expansion_flag(expand))
    }
}
