//! Pool catalog DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::PoolSummary;

/// Response body for `GET /pools`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PoolListResponse {
    /// Pool summaries in catalog order.
    pub data: Vec<PoolSummary>,
    /// Number of pools in the catalog.
    pub total: usize,
}

impl From<Vec<PoolSummary>> for PoolListResponse {
    fn from(data: Vec<PoolSummary>) -> Self {
        Self {
            total: data.len(),
            data,
        }
    }
}
