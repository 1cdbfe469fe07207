//! Shared domain types for the homecheck backend.
//!
//! Everything here is dependency-light on purpose: the db, cloud, and api
//! crates all build on these definitions.

pub mod error;
pub mod storage_key;
pub mod types;
pub mod validate;
