//! Service layer: business logic orchestration.
//!
//! [`SearchService`] composes the registry, filter engine, result source,
//! cursor codec, and expansion advisory into one search transaction.

pub mod search_service;

pub use search_service::SearchService;
