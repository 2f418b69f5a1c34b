// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_TTL_SECS: u64 = 1800;

/// Runtime configuration, read from the environment exactly once at
/// startup and passed into `AppState`. Handlers never touch env vars.
#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub groq_api_key: Option<String>,
    pub chat_credential_required: bool,
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let groq_api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let chat_credential_required = env_flag("CHAT_CREDENTIAL_REQUIRED");
        if chat_credential_required && groq_api_key.is_none() {
            bail!("CHAT_CREDENTIAL_REQUIRED is set but GROQ_API_KEY is missing");
        }

        let session_ttl_secs = match std::env::var("SESSION_TTL_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("SESSION_TTL_SECS is not a valid duration: {raw:?}"))?,
            Err(_) => DEFAULT_SESSION_TTL_SECS,
        };

        let config = Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            groq_api_key,
            chat_credential_required,
            session_ttl: Duration::from_secs(session_ttl_secs),
        };
        config.log_credential_status();
        Ok(config)
    }

    /// Startup diagnostics. Shows a short prefix of the key, never the value.
    fn log_credential_status(&self) {
        match &self.groq_api_key {
            Some(key) => {
                let prefix: String = key.chars().take(10).collect();
                tracing::info!("API key found: {prefix}...");
            }
            None => tracing::warn!("no GROQ_API_KEY in environment, chat will be disabled"),
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| is_truthy(&v)).unwrap_or(false)
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
