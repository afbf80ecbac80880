mod catalog;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// The active display language. Exactly two values; everything else read
/// from persisted preferences falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Wire/persistence form of the locale ("en" / "zh").
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Parse a persisted tag. `None` for anything that is not a known
    /// locale — the caller decides the fallback.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Persisted as a plain tag string. Deserialization is deliberately lenient:
// an unknown tag becomes the default locale instead of failing the whole
// preferences load.
impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Locale::from_tag(&tag).unwrap_or_default())
    }
}

/// Process-wide language state, made explicit: the embedding shell owns one
/// of these (usually through the facade) instead of reaching for a global.
///
/// Lookup is synchronous and total — a key unmapped in the active table
/// comes back as the key itself. That is the deliberate fallback for
/// strings added to the UI before the catalog, not an error.
pub struct LanguageContext {
    locale: Locale,
    en: HashMap<&'static str, &'static str>,
    zh: HashMap<&'static str, &'static str>,
}

impl LanguageContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            en: catalog::EN.iter().copied().collect(),
            zh: catalog::ZH.iter().copied().collect(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Look up `key` in the active locale's table; echo the key back when
    /// unmapped.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        let table = match self.locale {
            Locale::En => &self.en,
            Locale::Zh => &self.zh,
        };
        table.get(key).copied().unwrap_or(key)
    }

    /// All keys defined for a locale. Used by tests to verify both tables
    /// cover the same key set.
    pub fn keys(locale: Locale) -> Vec<&'static str> {
        let table = match locale {
            Locale::En => catalog::EN,
            Locale::Zh => catalog::ZH,
        };
        table.iter().map(|(k, _)| *k).collect()
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
