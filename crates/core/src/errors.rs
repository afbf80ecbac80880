use thiserror::Error;

/// Unified error type for the entire stock-guardian-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    /// Non-2xx response from the backend. `message` is the response body
    /// text verbatim when the body was non-empty, else `HTTP <status>`.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response from {path}: {message}")]
    Decode { path: String, message: String },

    // ── Preferences / File ──────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Client-side validation ──────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Build the error for a non-2xx response: surface the body text when
    /// present, else a generic status message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let text = body.trim();
        let message = if text.is_empty() {
            format!("HTTP {status}")
        } else {
            text.to_string()
        };
        CoreError::Api { status, message }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        CoreError::Network(e.to_string())
    }
}
