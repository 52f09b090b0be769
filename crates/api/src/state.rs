use std::sync::Arc;

use favorites_service::FavoritesService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the service holds its store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Favorites domain operations over the configured store.
    pub service: FavoritesService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
