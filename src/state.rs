// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::relay::ChatRelay;
use crate::services::session_manager::SessionManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub sessions: SessionManager,
    pub relay: ChatRelay,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            sessions: SessionManager::new(config.session_ttl),
            relay: ChatRelay::new(config.groq_api_key.clone()),
            config,
        }
    }
}
