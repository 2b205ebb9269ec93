use std::sync::Arc;

use ledger_db::store::EntityStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: both fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Entity store chosen at startup (memory or SQLite).
    pub store: Arc<dyn EntityStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
