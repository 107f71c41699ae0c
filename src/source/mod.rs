//! Result sources: where candidate records for a matched pool come from.
//!
//! The search pipeline treats records as opaque JSON values. A
//! [`ResultSource`] is injected into [`crate::service::SearchService`] and
//! asked once per matching pool.

pub mod mock;

use async_trait::async_trait;

use crate::domain::{Pool, PoolId, SearchHints};

pub use mock::MockCandidateSource;

/// Opaque candidate record as produced by a result source.
pub type CandidateRecord = serde_json::Value;

/// Failure reported by a result source.
#[derive(Debug, thiserror::Error)]
#[error("result source failed for pool {pool_id}: {reason}")]
pub struct SourceError {
    /// Pool whose records could not be produced.
    pub pool_id: PoolId,
    /// Human-readable cause, logged but never returned to clients.
    pub reason: String,
}

impl SourceError {
    /// Creates a new error for the given pool.
    #[must_use]
    pub fn new(pool_id: PoolId, reason: impl Into<String>) -> Self {
        Self {
            pool_id,
            reason: reason.into(),
        }
    }
}

/// Produces candidate records for a pool.
///
/// Implementations must be safe to call concurrently for different pools
/// of the same search.
#[async_trait]
pub trait ResultSource: Send + Sync + std::fmt::Debug {
    /// Returns up to `count` records drawn from `pool`, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the backing data cannot be fetched. The
    /// whole search is aborted in that case.
    async fn generate(
        &self,
        pool: &Pool,
        count: usize,
        hints: &SearchHints,
    ) -> Result<Vec<CandidateRecord>, SourceError>;
}
