use futures::future::try_join;

use crate::api::traits::StockApi;
use crate::errors::CoreError;
use crate::models::alert::Alert;
use crate::models::snapshot::Snapshot;

/// Snapshot table depth on the detail page.
pub const SNAPSHOT_ROWS: usize = 20;
/// Alert list depth on the detail page; the header still shows the total.
pub const ALERT_ROWS: usize = 10;

/// Builds the per-stock detail page: snapshots and alerts fetched
/// concurrently. Unlike the portfolio list, a failure here propagates —
/// there is nothing partial worth rendering.
pub struct StockDetailService;

impl StockDetailService {
    pub fn new() -> Self {
        Self
    }

    pub async fn load(
        &self,
        api: &dyn StockApi,
        symbol: &str,
    ) -> Result<StockDetailView, CoreError> {
        let symbol = symbol.trim().to_uppercase();
        let (snapshots, alerts) = try_join(api.snapshots(&symbol), api.alerts(&symbol)).await?;
        Ok(StockDetailView {
            symbol,
            snapshots,
            alerts,
        })
    }
}

impl Default for StockDetailService {
    fn default() -> Self {
        Self::new()
    }
}

/// The detail page as data. Lists keep the backend's newest-first order.
#[derive(Debug, Clone, PartialEq)]
pub struct StockDetailView {
    pub symbol: String,
    pub snapshots: Vec<Snapshot>,
    pub alerts: Vec<Alert>,
}

impl StockDetailView {
    /// The snapshot driving the metric cards. `None` is the "agent hasn't
    /// run yet" state, not an error.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    pub fn has_data(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// AI summary of the latest snapshot, when the agent produced one.
    pub fn summary(&self) -> Option<&str> {
        self.latest().and_then(|s| s.summary.as_deref())
    }

    /// Rows for the snapshot history table.
    pub fn snapshot_rows(&self) -> &[Snapshot] {
        let n = self.snapshots.len().min(SNAPSHOT_ROWS);
        &self.snapshots[..n]
    }

    /// The alerts actually listed on the page.
    pub fn recent_alerts(&self) -> &[Alert] {
        let n = self.alerts.len().min(ALERT_ROWS);
        &self.alerts[..n]
    }

    pub fn alert_total(&self) -> usize {
        self.alerts.len()
    }
}

// ── Display formatting ──────────────────────────────────────────────

/// "$150.20" — prices are always USD in this product.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Signed percent for the snapshot table: "+1.25%" / "-0.80%".
pub fn format_change(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{pct:.2}%")
    } else {
        format!("{pct:.2}%")
    }
}

/// Direction arrow for the price metric card, paired with the unsigned
/// magnitude ("↑ 1.25%").
pub fn change_arrow(pct: f64) -> &'static str {
    if pct >= 0.0 {
        "↑"
    } else {
        "↓"
    }
}
