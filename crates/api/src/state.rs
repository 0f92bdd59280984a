use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is an `Arc` internally and the config is
/// behind one explicitly.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: kino_db::DbPool,
    /// Server configuration (read by the auth extractor and middleware).
    pub config: Arc<ServerConfig>,
}
