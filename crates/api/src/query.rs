//! Raw query-parameter structs for list endpoints.
//!
//! These deserialize the wire form verbatim (CSV id lists and date strings
//! as plain strings); handlers convert them into the typed filter specs in
//! `kino_db::models` via `kino_core::params`, rejecting malformed input
//! with `InvalidParameter` before any query runs.
//!
//! A present-but-empty parameter (`?title=`) is treated as absent.

use serde::Deserialize;

/// Query parameters for `GET /movies`.
#[derive(Debug, Deserialize)]
pub struct MovieListParams {
    /// Case-insensitive substring filter on title.
    pub title: Option<String>,
    /// Comma-separated actor ids.
    pub actors: Option<String>,
    /// Comma-separated genre ids.
    pub genres: Option<String>,
}

/// Query parameters for `GET /movie-sessions`.
#[derive(Debug, Deserialize)]
pub struct MovieSessionListParams {
    /// Comma-separated movie ids.
    pub movie: Option<String>,
    /// Calendar date, strictly `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// Query parameters for `GET /orders`.
///
/// `page_size` selects the page *size* (default 5, clamped to 10);
/// `page` selects the 1-based page number.
#[derive(Debug, Deserialize)]
pub struct OrderListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Normalize a raw parameter: present-but-empty means "no filter".
pub fn non_empty(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_passes_values_through() {
        assert_eq!(non_empty(&Some("1,2".into())), Some("1,2"));
    }

    #[test]
    fn test_non_empty_treats_empty_string_as_absent() {
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&None), None);
    }
}
