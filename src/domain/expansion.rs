//! Expansion advisory.
//!
//! When a search yields too few candidates the response carries a
//! `needs_expansion_confirmation` flag so the caller can decide whether to
//! broaden the query. The service never widens a search on its own.

/// Minimum number of results below which expansion is advised.
pub const EXPANSION_THRESHOLD: usize = 3;

/// Returns `true` when `total` is below [`EXPANSION_THRESHOLD`] and the
/// caller has not already opted into progressive search.
#[inline]
#[must_use]
pub const fn needs_expansion(total: usize, progressive_search: bool) -> bool {
    total < EXPANSION_THRESHOLD && !progressive_search
}
