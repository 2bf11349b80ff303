// Application state shared across all modules

use super::config::AppConfig;

/// Application state containing runtime configuration
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
