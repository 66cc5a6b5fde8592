//! Shared application state for the play server.

use std::sync::Arc;

use player::io::config::PlayerConfig;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Validated player config, loaded once at startup.
    pub config: Arc<PlayerConfig>,
}

impl AppState {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
