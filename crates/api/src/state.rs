use std::sync::Arc;

use perfdash_db::{DbPool, ItemStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Item store backing every repository call.
    pub store: Arc<dyn ItemStore>,
    /// Postgres pool behind `store`, when running against a database.
    /// Used by the health check only.
    pub pool: Option<DbPool>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn store(&self) -> &dyn ItemStore {
        self.store.as_ref()
    }
}
