use std::sync::Arc;

use yapp_db::store::ItemStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Item persistence backend.
    pub store: Arc<dyn ItemStore>,
    /// Server configuration (the landing page reports the listen port).
    pub config: Arc<ServerConfig>,
}
