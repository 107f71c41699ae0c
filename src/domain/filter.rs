//! Pool filter engine.
//!
//! Each pool must pass the region, category, and specialization checks
//! (AND semantics). An absent or empty criterion never excludes a pool.
//! Matching preserves registry order.

use super::{Pool, SearchQuery};

/// Region check: no region requested, exact match, or a global pool.
#[inline]
pub fn region_matches(pool: &Pool, region: Option<&str>) -> bool {
    match region {
        None | Some("") => true,
        Some(region) => pool.region == region || pool.is_global(),
    }
}

/// Category check: no category requested or exact match.
#[inline]
pub fn category_matches(pool: &Pool, category: Option<&str>) -> bool {
    match category {
        None | Some("") => true,
        Some(category) => pool.category == category,
    }
}

/// Specialization check: no tags requested, or any requested tag is a
/// case-insensitive substring of any pool tag.
#[inline]
pub fn specializations_match(pool: &Pool, specializations: &[String]) -> bool {
    if specializations.is_empty() {
        return true;
    }

    let pool_tags: Vec<String> = pool
        .specializations
        .iter()
        .map(|tag| tag.to_lowercase())
        .collect();

    specializations.iter().any(|wanted| {
        let wanted = wanted.to_lowercase();
        pool_tags.iter().any(|tag| tag.contains(&wanted))
    })
}

/// Returns `true` if the pool satisfies every criterion of the query.
#[inline]
pub fn matches_pool(pool: &Pool, query: &SearchQuery) -> bool {
    region_matches(pool, query.region.as_deref())
        && category_matches(pool, query.category.as_deref())
        && specializations_match(pool, &query.specializations)
}

/// Returns the pools matching `query`, in catalog order.
pub fn filter_pools<'a>(pools: &'a [Pool], query: &SearchQuery) -> Vec<&'a Pool> {
    pools.iter().filter(|pool| matches_pool(pool, query)).collect()
}
