//! Shared domain types for the cinema booking backend.
//!
//! This crate is deliberately free of async and I/O: it holds the error
//! taxonomy, id/timestamp aliases, and the query-parameter parsing helpers
//! used by both the persistence and HTTP layers.

pub mod error;
pub mod params;
pub mod types;
