use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::alert::Alert;
use crate::models::holding::{Holding, NewHolding};
use crate::models::report::DailyReport;
use crate::models::rule::{Rule, RuleUpdate};
use crate::models::snapshot::Snapshot;
use crate::models::user::{NewUser, Token, User};

/// The full endpoint surface of the stock-monitoring backend.
///
/// View builders depend on this contract, not on the transport, so a test
/// can swap in a canned implementation and the HTTP details live in exactly
/// one place. The reqwest-backed [`http::HttpStockApi`](super::http::HttpStockApi)
/// is the only production implementation.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait StockApi: Send + Sync {
    /// GET `/api/portfolio/holdings`
    async fn list_holdings(&self) -> Result<Vec<Holding>, CoreError>;

    /// POST `/api/portfolio/holdings`
    async fn add_holding(&self, holding: &NewHolding) -> Result<Holding, CoreError>;

    /// DELETE `/api/portfolio/holdings/{id}`
    async fn delete_holding(&self, id: i64) -> Result<(), CoreError>;

    /// GET `/api/reports/stock/{symbol}/snapshots` — most recent first
    async fn snapshots(&self, symbol: &str) -> Result<Vec<Snapshot>, CoreError>;

    /// GET `/api/reports/stock/{symbol}/alerts` — most recent first
    async fn alerts(&self, symbol: &str) -> Result<Vec<Alert>, CoreError>;

    /// GET `/api/rules/stock/{symbol}`
    async fn rule(&self, symbol: &str) -> Result<Rule, CoreError>;

    /// PATCH `/api/rules/stock/{symbol}` — partial body, full rule back
    async fn update_rule(&self, symbol: &str, patch: &RuleUpdate) -> Result<Rule, CoreError>;

    /// GET `/api/daily/reports`
    async fn daily_reports(&self) -> Result<Vec<DailyReport>, CoreError>;

    /// POST `/api/auth/register`
    async fn register(&self, user: &NewUser) -> Result<User, CoreError>;

    /// POST `/api/auth/login` — legacy form-encoded body
    async fn login(&self, username: &str, password: &str) -> Result<Token, CoreError>;

    /// GET `/api/auth/me`
    async fn me(&self) -> Result<User, CoreError>;

    /// Set or clear the bearer token attached to subsequent requests.
    fn set_token(&self, token: Option<String>);
}
