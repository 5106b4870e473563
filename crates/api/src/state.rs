use std::sync::Arc;

use savedate_db::SaveDateStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Save-the-date persistence.
    pub store: Arc<dyn SaveDateStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
