use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::i18n::Locale;

/// Fixed storage keys for the two persisted values. These double as the
/// JSON field names, so a blob written by the web shell reads unchanged.
pub const LANGUAGE_KEY: &str = "language";
pub const TOKEN_KEY: &str = "token";

/// Everything this client persists locally: the display locale and the
/// opaque auth token. No expiry, no validation — the token is whatever the
/// backend last handed out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Active display language; unknown persisted tags fall back to English
    #[serde(rename = "language", default)]
    pub locale: Locale,

    /// Bearer token from the last login, if any
    #[serde(rename = "token", default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Preferences {
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            token: None,
        }
    }
}

/// Save/load preferences to/from raw bytes or files.
///
/// The bytes API exists for WASM/Tauri hosts where the shell owns the
/// actual storage (browser localStorage, app data dir); the file helpers
/// cover native hosts directly.
pub struct PreferencesStore;

impl PreferencesStore {
    /// Serialize preferences to JSON bytes the host can stash anywhere.
    pub fn to_bytes(prefs: &Preferences) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec(prefs)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize preferences: {e}")))
    }

    /// Parse preferences from raw bytes. Unknown locale tags inside valid
    /// JSON fall back to the default; bytes that are not valid JSON are an
    /// error the caller may choose to treat as "start fresh".
    pub fn from_bytes(data: &[u8]) -> Result<Preferences, CoreError> {
        serde_json::from_slice(data).map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse preferences: {e}"))
        })
    }

    /// Parse preferences, treating anything unreadable as defaults: a
    /// session with empty or junk storage starts in English, logged out.
    pub fn from_bytes_or_default(data: &[u8]) -> Preferences {
        match Self::from_bytes(data) {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("ignoring unreadable preferences: {e}");
                Preferences::default()
            }
        }
    }

    /// Save preferences to a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(prefs: &Preferences, path: &str) -> Result<(), CoreError> {
        let bytes = Self::to_bytes(prefs)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load preferences from a file on disk (native only). A missing file
    /// yields defaults; an unreadable one is an error.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Preferences, CoreError> {
        match std::fs::read(path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(e.into()),
        }
    }
}
