use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// How aggressively the backend agent should treat a position when it
/// weighs alerts. A closed three-value set, serialized lowercase on the
/// wire (`"conservative"` / `"neutral"` / `"aggressive"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskPreference {
    Conservative,
    #[default]
    Neutral,
    Aggressive,
}

impl RiskPreference {
    /// Wire/display form of the preference.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskPreference::Conservative => "conservative",
            RiskPreference::Neutral => "neutral",
            RiskPreference::Aggressive => "aggressive",
        }
    }

    /// Translation key for the localized label shown in the add form.
    pub fn translation_key(&self) -> &'static str {
        match self {
            RiskPreference::Conservative => "portfolio.add.conservative",
            RiskPreference::Neutral => "portfolio.add.neutral",
            RiskPreference::Aggressive => "portfolio.add.aggressive",
        }
    }
}

impl std::fmt::Display for RiskPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked stock position, owned by the backend.
///
/// Created via POST and never mutated client-side after that; everything
/// here is a read-only projection of the server's row. Snapshots are
/// associated by `symbol` string, not a reference the client validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: i64,

    /// Ticker symbol, uppercased by the backend (e.g., "AAPL")
    pub symbol: String,

    /// Optional human-readable company name
    #[serde(default)]
    pub name: Option<String>,

    /// Position size; informational only, the client never computes with it
    #[serde(default)]
    pub shares: Option<f64>,

    #[serde(default)]
    pub cost_basis: Option<f64>,

    pub risk_pref: RiskPreference,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/portfolio/holdings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewHolding {
    pub symbol: String,
    pub risk_pref: RiskPreference,
}

impl NewHolding {
    /// Normalize and validate user input the way the add form does:
    /// trim, uppercase, reject anything that is not plain alphanumeric.
    /// Invalid input never reaches the wire.
    pub fn parse(symbol: &str, risk_pref: RiskPreference) -> Result<Self, CoreError> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(CoreError::ValidationError("Symbol must not be empty".into()));
        }
        if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid symbol '{symbol}': only letters and digits are allowed"
            )));
        }
        Ok(Self { symbol, risk_pref })
    }
}
