//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool; clones share the pool. Each statement
/// checks a connection out of the pool and returns it when the statement completes,
/// on success and on error alike.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided database pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
