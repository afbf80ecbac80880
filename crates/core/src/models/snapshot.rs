use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentiment score below/at which a stock reads as bearish, and at/above
/// which it reads as bullish. Scores are backend-computed on a 0–100 scale.
const SENTIMENT_BULLISH_GE: f64 = 60.0;
const SENTIMENT_BEARISH_LE: f64 = 40.0;

/// Risk score bands on the backend's 0–10 scale.
const RISK_HIGH_GE: f64 = 7.0;
const RISK_MEDIUM_GE: f64 = 4.0;

/// Display defaults for a holding the agent has not snapshotted yet.
pub const PENDING_SENTIMENT: f64 = 50.0;
pub const PENDING_RISK: f64 = 5.0;

/// A point-in-time backend-computed valuation of a symbol.
///
/// Read-only; the backend returns snapshot lists most recent first and the
/// client preserves that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub ts: Option<DateTime<Utc>>,

    pub price: f64,

    /// Signed 1-day percent change
    #[serde(default)]
    pub change_pct_1d: f64,

    #[serde(default)]
    pub volume: Option<f64>,

    /// 0–100, higher is more bullish
    pub sentiment_score: f64,

    /// 0–10, higher is riskier
    pub risk_score: f64,

    /// AI-generated analysis text, when the agent produced one
    #[serde(default)]
    pub summary: Option<String>,
}

impl Snapshot {
    pub fn sentiment_label(&self) -> SentimentLabel {
        SentimentLabel::from_score(self.sentiment_score)
    }

    pub fn risk_label(&self) -> RiskLabel {
        RiskLabel::from_score(self.risk_score)
    }

    /// True when the 1-day change is flat or positive (drives the up/down
    /// arrow and color in every view).
    pub fn is_gaining(&self) -> bool {
        self.change_pct_1d >= 0.0
    }
}

/// Qualitative sentiment band shown next to the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Bullish,
    Bearish,
    Neutral,
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= SENTIMENT_BULLISH_GE {
            SentimentLabel::Bullish
        } else if score <= SENTIMENT_BEARISH_LE {
            SentimentLabel::Bearish
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            SentimentLabel::Bullish => "card.bullish",
            SentimentLabel::Bearish => "card.bearish",
            SentimentLabel::Neutral => "card.neutral",
        }
    }
}

/// Qualitative risk band shown next to the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    High,
    Medium,
    Low,
}

impl RiskLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= RISK_HIGH_GE {
            RiskLabel::High
        } else if score >= RISK_MEDIUM_GE {
            RiskLabel::Medium
        } else {
            RiskLabel::Low
        }
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            RiskLabel::High => "card.high",
            RiskLabel::Medium => "card.medium",
            RiskLabel::Low => "card.low",
        }
    }
}
