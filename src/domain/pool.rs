//! Talent pool catalog entry and its public summary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PoolId;

/// Region label that matches every requested region.
pub const GLOBAL_REGION: &str = "Global";

/// A named, attribute-tagged group from which candidate records are drawn.
///
/// Pools are created when the registry is loaded and are never mutated
/// afterwards. The `link` is an internal reference consumed only by a
/// [`crate::source::ResultSource`] and must never reach a client; use
/// [`PoolSummary`] for anything serialized outward.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pool {
    /// Unique catalog key.
    pub id: PoolId,
    /// Free-form region label, or [`GLOBAL_REGION`].
    pub region: String,
    /// Free-form category label (e.g. `"graduate"`).
    pub category: String,
    /// Specialization tags, stored as given and matched case-insensitively.
    #[serde(default)]
    pub specializations: Vec<String>,
    /// Opaque reference used by the result source.
    #[serde(default)]
    pub link: String,
}

impl Pool {
    /// Creates a pool from its attributes.
    #[must_use]
    pub fn new(
        id: impl Into<PoolId>,
        region: impl Into<String>,
        category: impl Into<String>,
        specializations: Vec<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            region: region.into(),
            category: category.into(),
            specializations,
            link: link.into(),
        }
    }

    /// Returns `true` if this pool is tagged with the wildcard region.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.region == GLOBAL_REGION
    }
}

/// Client-facing view of a pool for catalog listings.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PoolSummary {
    /// Pool identifier.
    #[schema(value_type = String)]
    pub pool_id: PoolId,
    /// Region label.
    pub region: String,
    /// Category label.
    pub category: String,
    /// Specialization tags.
    pub specializations: Vec<String>,
}

impl From<&Pool> for PoolSummary {
    fn from(pool: &Pool) -> Self {
        Self {
            pool_id: pool.id.clone(),
            region: pool.region.clone(),
            category: pool.category.clone(),
            specializations: pool.specializations.clone(),
        }
    }
}
