//! Domain layer: pools, the registry, and the search pipeline stages.
//!
//! This module contains the server-side domain model including pool
//! identity, the read-only pool registry, the filter engine, continuation
//! cursors, page slicing, and the expansion advisory.

pub mod cursor;
pub mod expansion;
pub mod filter;
pub mod page;
pub mod pool;
pub mod pool_id;
pub mod pool_registry;
pub mod search_query;

pub use cursor::{Cursor, CursorError};
pub use expansion::{EXPANSION_THRESHOLD, needs_expansion};
pub use filter::filter_pools;
pub use page::Page;
pub use pool::{GLOBAL_REGION, Pool, PoolSummary};
pub use pool_id::PoolId;
pub use pool_registry::{PoolRegistry, RegistryError};
pub use search_query::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, SearchHints, SearchQuery};
