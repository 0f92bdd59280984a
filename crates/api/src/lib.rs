//! HTTP surface of the cinema booking backend.
//!
//! Handlers translate query parameters into explicit filter specs, pick a
//! representation shape per (entity, operation), and delegate persistence
//! to `kino-db` repositories. Exposed as a library so integration tests
//! can build the exact router the binary serves.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod representation;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
