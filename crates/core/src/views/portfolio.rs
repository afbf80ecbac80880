use futures::future::join_all;

use crate::api::traits::StockApi;
use crate::errors::CoreError;
use crate::models::holding::{Holding, NewHolding, RiskPreference};
use crate::models::snapshot::{RiskLabel, SentimentLabel, Snapshot, PENDING_RISK, PENDING_SENTIMENT};

/// Builds the portfolio page: the holdings list enriched with each
/// symbol's latest snapshot, plus the stats row above it.
///
/// Per-symbol snapshot fetches run concurrently and an individual failure
/// is logged and dropped, so one bad symbol never blanks the whole list —
/// its card just stays `Pending`.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    pub async fn load(&self, api: &dyn StockApi) -> Result<PortfolioOverview, CoreError> {
        let holdings = api.list_holdings().await?;

        let fetches = holdings.iter().map(|h| {
            let symbol = h.symbol.clone();
            async move {
                match api.snapshots(&symbol).await {
                    Ok(mut snaps) => {
                        if snaps.is_empty() {
                            None
                        } else {
                            Some(snaps.remove(0))
                        }
                    }
                    Err(e) => {
                        log::warn!("latest snapshot unavailable for {symbol}: {e}");
                        None
                    }
                }
            }
        });
        let latest = join_all(fetches).await;

        let cards: Vec<HoldingCard> = holdings
            .into_iter()
            .zip(latest)
            .map(|(holding, latest)| HoldingCard { holding, latest })
            .collect();
        let stats = PortfolioStats::compute(&cards);

        Ok(PortfolioOverview { cards, stats })
    }

    /// Validate and submit a new position. Invalid symbols are rejected
    /// before any request is made.
    pub async fn add_holding(
        &self,
        api: &dyn StockApi,
        symbol: &str,
        risk_pref: RiskPreference,
    ) -> Result<Holding, CoreError> {
        let holding = NewHolding::parse(symbol, risk_pref)?;
        api.add_holding(&holding).await
    }

    pub async fn remove_holding(&self, api: &dyn StockApi, id: i64) -> Result<(), CoreError> {
        api.delete_holding(id).await
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}

/// The whole portfolio page as data.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioOverview {
    pub cards: Vec<HoldingCard>,
    pub stats: PortfolioStats,
}

/// Whether the agent has produced data for a holding yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitoringStatus {
    Active,
    Pending,
}

impl MonitoringStatus {
    pub fn translation_key(&self) -> &'static str {
        match self {
            MonitoringStatus::Active => "card.active",
            MonitoringStatus::Pending => "card.pending",
        }
    }
}

/// One holding plus its most recent snapshot, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingCard {
    pub holding: Holding,
    pub latest: Option<Snapshot>,
}

impl HoldingCard {
    pub fn monitoring(&self) -> MonitoringStatus {
        if self.latest.is_some() {
            MonitoringStatus::Active
        } else {
            MonitoringStatus::Pending
        }
    }

    /// Sentiment to display; a pending card shows the neutral default.
    pub fn sentiment_score(&self) -> f64 {
        self.latest
            .as_ref()
            .map(|s| s.sentiment_score)
            .unwrap_or(PENDING_SENTIMENT)
    }

    /// Risk to display; a pending card shows the mid-band default.
    pub fn risk_score(&self) -> f64 {
        self.latest
            .as_ref()
            .map(|s| s.risk_score)
            .unwrap_or(PENDING_RISK)
    }

    pub fn sentiment_label(&self) -> SentimentLabel {
        SentimentLabel::from_score(self.sentiment_score())
    }

    pub fn risk_label(&self) -> RiskLabel {
        RiskLabel::from_score(self.risk_score())
    }

    pub fn price_display(&self) -> String {
        match &self.latest {
            Some(s) => super::stock_detail::format_price(s.price),
            None => "—".to_string(),
        }
    }
}

/// The four-tile stats row above the holdings grid.
///
/// Averages cover the snapshots that actually arrived; with holdings but
/// no snapshots yet they are `None` and render as a dash.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioStats {
    pub total_positions: usize,
    pub active: usize,
    pub avg_risk: Option<f64>,
    pub avg_sentiment: Option<f64>,
}

impl PortfolioStats {
    pub fn compute(cards: &[HoldingCard]) -> Self {
        let snapshots: Vec<&Snapshot> = cards.iter().filter_map(|c| c.latest.as_ref()).collect();
        let active = snapshots.len();

        let (avg_risk, avg_sentiment) = if active > 0 {
            let risk_sum: f64 = snapshots.iter().map(|s| s.risk_score).sum();
            let sentiment_sum: f64 = snapshots.iter().map(|s| s.sentiment_score).sum();
            (
                Some(risk_sum / active as f64),
                Some(sentiment_sum / active as f64),
            )
        } else {
            (None, None)
        };

        Self {
            total_positions: cards.len(),
            active,
            avg_risk,
            avg_sentiment,
        }
    }

    /// "Avg Risk Score" tile: one decimal, dash when no data.
    pub fn avg_risk_display(&self) -> String {
        match self.avg_risk {
            Some(v) => format!("{v:.1}"),
            None => "—".to_string(),
        }
    }

    /// "Avg Sentiment" tile: whole number, dash when no data.
    pub fn avg_sentiment_display(&self) -> String {
        match self.avg_sentiment {
            Some(v) => format!("{v:.0}"),
            None => "—".to_string(),
        }
    }
}
