use serde::{Deserialize, Serialize};

/// Backend instance used when no base URL is supplied (local development).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the backend base URL on native hosts.
#[cfg(not(target_arch = "wasm32"))]
pub const BASE_URL_ENV: &str = "STOCK_GUARDIAN_API_BASE";

/// Selects which backend instance the client addresses.
///
/// The only configuration knob this client has: everything else (agent
/// schedule, scoring, rule evaluation) is owned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config for a specific backend instance.
    /// Trailing slashes are stripped so paths can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from the environment, falling back to the
    /// local-development default (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
