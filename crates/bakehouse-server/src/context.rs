//! Shared application state for route handlers.

use std::sync::Arc;

use bakehouse_core::config::Config;
use bakehouse_db::pool::DbPool;

/// Application context shared by all request handlers (via Axum state).
///
/// This is cheaply cloneable: the pool is internally reference-counted and
/// the config snapshot sits behind an `Arc`.
#[derive(Clone)]
pub struct AppContext {
    /// Database connection pool.
    pub db: DbPool,
    /// Immutable application configuration snapshot.
    pub config: Arc<Config>,
}

impl AppContext {
    pub fn new(db: DbPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
