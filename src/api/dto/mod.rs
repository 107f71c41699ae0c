//! Data Transfer Objects for REST request/response serialization.
//!
//! Candidate records are opaque JSON objects and are passed through
//! exactly as the result source produced them.

pub mod pool_dto;
pub mod search_dto;

pub use pool_dto::*;
pub use search_dto::*;
