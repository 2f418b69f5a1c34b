// src/routes/pages.rs
use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::SharedState;

/// Reports whether the chat credential is configured, never its value.
#[derive(Serialize)]
pub struct DebugInfo {
    pub api_key_set: bool,
    pub api_key_length: usize,
    pub relay_enabled: bool,
}

pub async fn debug_handler(State(state): State<SharedState>) -> Json<DebugInfo> {
    let key = state.config.groq_api_key.as_deref();
    Json(DebugInfo {
        api_key_set: key.is_some(),
        api_key_length: key.map(str::len).unwrap_or(0),
        relay_enabled: state.relay.enabled(),
    })
}
