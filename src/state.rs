//! Application state management.

use crate::db::DatabasePool;

/// Application state shared across all handlers.
///
/// Built once at startup and handed to the router; handlers reach the pool
/// only through this value.
#[derive(Clone)]
pub struct AppState {
    /// Database pool.
    pub db: DatabasePool,
}

impl AppState {
    /// Creates a new application state around an open pool.
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}
