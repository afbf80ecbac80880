use serde::{Deserialize, Serialize};

/// Per-symbol threshold configuration the backend evaluates periodically.
///
/// The client never evaluates these conditions; it only edits them. After a
/// PATCH the entire local object is replaced with the server's response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub enabled: bool,

    /// Trigger when risk score ≥ this (0–10)
    pub risk_ge: f64,

    /// Trigger when sentiment score ≤ this (0–100)
    pub sentiment_le: f64,

    /// Trigger when hot score ≥ this (0–100)
    pub hot_ge: f64,

    /// Trigger when |1-day change %| ≥ this (0–20)
    pub change_abs_ge: f64,
}

/// Body of `PATCH /api/rules/stock/{symbol}`.
///
/// Only fields being changed are serialized; the backend applies
/// exclude-unset semantics, so an omitted field keeps its server value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_ge: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_le: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_ge: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_abs_ge: Option<f64>,
}

impl RuleUpdate {
    /// True when no field is set — such a patch is never sent.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none()
            && self.risk_ge.is_none()
            && self.sentiment_le.is_none()
            && self.hot_ge.is_none()
            && self.change_abs_ge.is_none()
    }

    /// True when the patch touches a threshold (anything besides `enabled`).
    pub fn touches_thresholds(&self) -> bool {
        self.risk_ge.is_some()
            || self.sentiment_le.is_some()
            || self.hot_ge.is_some()
            || self.change_abs_ge.is_some()
    }
}
