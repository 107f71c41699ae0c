//! Read-only catalog of talent pools.
//!
//! [`PoolRegistry`] is built once at startup, either from the built-in
//! catalog or from a JSON file, and shared behind an `Arc` for the lifetime
//! of the process. It never changes after construction, so concurrent
//! readers need no locking.

use std::collections::HashSet;
use std::path::Path;

use super::{Pool, PoolId};
use crate::sanitize::sanitize;

/// Errors raised while building a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two pools share the same identifier.
    #[error("duplicate pool id: {0}")]
    DuplicatePool(PoolId),

    /// A region or category label contains characters that queries can
    /// never carry, so the pool could never be matched on it.
    #[error("pool {pool}: label {label:?} has characters outside [A-Za-z0-9 _-]")]
    UnmatchableLabel {
        /// Pool carrying the label.
        pool: PoolId,
        /// Offending label.
        label: String,
    },

    /// The catalog file could not be read.
    #[error("failed to read pool catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a JSON array of pools.
    #[error("failed to parse pool catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable, ordered catalog of pools.
///
/// Catalog order is significant: it is the order in which matching pools
/// contribute candidates to a search result.
#[derive(Debug, Clone, Default)]
pub struct PoolRegistry {
    pools: Vec<Pool>,
}

impl PoolRegistry {
    /// Builds a registry from pools in catalog order.
    ///
    /// Region and category are matched exactly against sanitized query
    /// text, so they are limited to the same character set.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicatePool`] if two pools share an id and
    /// [`RegistryError::UnmatchableLabel`] if a region or category holds
    /// characters the query sanitizer strips.
    pub fn from_pools(pools: Vec<Pool>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(pools.len());
        for pool in &pools {
            if !seen.insert(&pool.id) {
                return Err(RegistryError::DuplicatePool(pool.id.clone()));
            }
            for label in [&pool.region, &pool.category] {
                if sanitize(label) != *label {
                    return Err(RegistryError::UnmatchableLabel {
                        pool: pool.id.clone(),
                        label: label.clone(),
                    });
                }
            }
        }
        Ok(Self { pools })
    }

    /// Parses a registry from a JSON array of pools.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] on malformed JSON, plus any error
    /// from [`PoolRegistry::from_pools`].
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let pools: Vec<Pool> = serde_json::from_str(raw)?;
        Self::from_pools(pools)
    }

    /// Loads a registry from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read, plus any
    /// error from [`PoolRegistry::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The built-in catalog served when no catalog file is configured.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            pools: vec![
                Pool::new(
                    "eu_grad_pool",
                    "Europe",
                    "graduate",
                    vec!["Frontend".to_string()],
                    "HIDDEN_INTERNAL_LINK",
                ),
                Pool::new(
                    "us_industry_pool",
                    "North America",
                    "industry",
                    vec!["Fullstack".to_string(), "Fintech".to_string()],
                    "HIDDEN_INTERNAL_LINK",
                ),
                Pool::new(
                    "global_consultant_pool",
                    "Global",
                    "consultant",
                    vec!["AI".to_string(), "ML".to_string()],
                    "HIDDEN_INTERNAL_LINK",
                ),
            ],
        }
    }

    /// Returns the full catalog in registry order.
    #[must_use]
    pub fn lookup(&self) -> &[Pool] {
        &self.pools
    }

    /// Returns the number of pools in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if the registry contains no pools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
