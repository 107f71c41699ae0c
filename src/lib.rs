//! # talent-gateway
//!
//! REST gateway for searching a catalog of talent pools.
//!
//! A search filters the pool catalog by region, category, and
//! specializations, asks a pluggable result source for candidates from
//! every matching pool, returns one page of the flattened results with an
//! opaque continuation token, and flags narrow result sets so the caller
//! can decide whether to broaden the query.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── SearchService (service/)
//!     │     ├── filter → cursor → page → expansion (domain/)
//!     │     └── ResultSource (source/)
//!     │
//!     └── PoolRegistry (domain/, read-only)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod sanitize;
pub mod service;
pub mod source;
