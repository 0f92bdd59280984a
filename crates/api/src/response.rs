//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Paginated listings
//! additionally carry page metadata alongside the data array.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Paginated `{ "data": [...], "page", "page_size", "total" }` envelope.
///
/// `total` is the number of matching items across all pages.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
}
