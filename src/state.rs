use std::sync::Arc;

use apikit_config::Settings;
use apikit_core::ConfigError;

#[derive(Clone, Debug)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

pub fn init_app_state() -> Result<AppState, ConfigError> {
    Settings::from_env().map(AppState::new)
}
