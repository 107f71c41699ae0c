//! Type-safe pool identifier.
//!
//! [`PoolId`] is a newtype wrapper around the catalog key of a talent pool
//! (e.g. `"eu_grad_pool"`), so pool identifiers cannot be confused with
//! regions, categories, or other free-form labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a talent pool.
///
/// Assigned when the registry is loaded and immutable thereafter. Used as
/// the uniqueness key in [`super::PoolRegistry`] and echoed into every
/// candidate record as the `network` a candidate was sourced from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolId(String);

impl PoolId {
    /// Creates a `PoolId` from any string-like key.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PoolId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PoolId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
