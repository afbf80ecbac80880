pub mod api;
pub mod config;
pub mod errors;
pub mod i18n;
pub mod models;
pub mod storage;
pub mod views;

use api::http::HttpStockApi;
use api::traits::StockApi;
use config::ApiConfig;
use errors::CoreError;
use i18n::{LanguageContext, Locale};
use models::holding::{Holding, RiskPreference};
use models::rule::{Rule, RuleUpdate};
use models::user::{NewUser, User};
use storage::preferences::{Preferences, PreferencesStore};
use views::daily::{DailyReportService, DailyReportsView};
use views::portfolio::{PortfolioOverview, PortfolioService};
use views::rules::RuleService;
use views::stock_detail::{StockDetailService, StockDetailView};

/// Main entry point for the Stock Guardian client core.
///
/// One explicit context object: it owns the backend connection, the
/// language context, and the persisted preferences, and exposes every page
/// of the product as an operation returning display-ready data. The
/// embedding shell (WASM, Tauri, terminal) owns its lifecycle and persists
/// the preference bytes wherever it keeps local state.
#[must_use]
pub struct StockGuardian {
    api: Box<dyn StockApi>,
    language: LanguageContext,
    preferences: Preferences,
    portfolio_service: PortfolioService,
    stock_detail_service: StockDetailService,
    rule_service: RuleService,
    daily_service: DailyReportService,
    /// Tracks whether preferences changed since the last export/save.
    dirty: bool,
}

impl std::fmt::Debug for StockGuardian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockGuardian")
            .field("locale", &self.language.locale())
            .field("authenticated", &self.preferences.token.is_some())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl StockGuardian {
    /// Connect to a backend with default preferences.
    pub fn connect(config: &ApiConfig) -> Self {
        Self::with_api(Box::new(HttpStockApi::new(config)), Preferences::default())
    }

    /// Connect, restoring previously exported preference bytes. Unreadable
    /// bytes start a fresh session rather than failing.
    pub fn connect_with_preferences(config: &ApiConfig, data: &[u8]) -> Self {
        let preferences = PreferencesStore::from_bytes_or_default(data);
        Self::with_api(Box::new(HttpStockApi::new(config)), preferences)
    }

    /// Connect, restoring preferences from a file (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn connect_with_preferences_file(
        config: &ApiConfig,
        path: &str,
    ) -> Result<Self, CoreError> {
        let preferences = PreferencesStore::load_from_file(path)?;
        Ok(Self::with_api(
            Box::new(HttpStockApi::new(config)),
            preferences,
        ))
    }

    /// Build over any `StockApi` implementation. This is how tests inject
    /// a canned backend, and how an embedder could swap the transport.
    pub fn with_api(api: Box<dyn StockApi>, preferences: Preferences) -> Self {
        api.set_token(preferences.token.clone());
        let language = LanguageContext::new(preferences.locale);
        Self {
            api,
            language,
            preferences,
            portfolio_service: PortfolioService::new(),
            stock_detail_service: StockDetailService::new(),
            rule_service: RuleService::new(),
            daily_service: DailyReportService::new(),
            dirty: false,
        }
    }

    // ── Language ────────────────────────────────────────────────────

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.language.locale()
    }

    /// Switch the display language. The change is observable by every
    /// consumer immediately and marks preferences for persistence.
    pub fn set_locale(&mut self, locale: Locale) {
        if self.preferences.locale != locale {
            self.preferences.locale = locale;
            self.language.set_locale(locale);
            self.dirty = true;
        }
    }

    /// Look up a UI string in the active locale; unmapped keys echo back.
    #[must_use]
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.language.translate(key)
    }

    // ── Session ─────────────────────────────────────────────────────

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.preferences.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.preferences.token.is_some()
    }

    /// Log in via the legacy form-encoded endpoint and hold the returned
    /// token for subsequent requests. No expiry handling client-side.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), CoreError> {
        let token = self.api.login(username, password).await?;
        self.api.set_token(Some(token.access_token.clone()));
        self.preferences.token = Some(token.access_token);
        self.dirty = true;
        Ok(())
    }

    /// Drop the held token.
    pub fn logout(&mut self) {
        if self.preferences.token.take().is_some() {
            self.api.set_token(None);
            self.dirty = true;
        }
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<User, CoreError> {
        let user = NewUser {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.api.register(&user).await
    }

    pub async fn current_user(&self) -> Result<User, CoreError> {
        self.api.me().await
    }

    // ── Pages ───────────────────────────────────────────────────────

    /// The portfolio page: holdings enriched with latest snapshots plus
    /// the stats row.
    pub async fn portfolio(&self) -> Result<PortfolioOverview, CoreError> {
        self.portfolio_service.load(self.api.as_ref()).await
    }

    /// Add a position; the symbol is validated client-side first.
    pub async fn add_holding(
        &self,
        symbol: &str,
        risk_pref: RiskPreference,
    ) -> Result<Holding, CoreError> {
        self.portfolio_service
            .add_holding(self.api.as_ref(), symbol, risk_pref)
            .await
    }

    pub async fn remove_holding(&self, id: i64) -> Result<(), CoreError> {
        self.portfolio_service
            .remove_holding(self.api.as_ref(), id)
            .await
    }

    /// The per-stock detail page: snapshots, alerts, latest metrics.
    pub async fn stock_detail(&self, symbol: &str) -> Result<StockDetailView, CoreError> {
        self.stock_detail_service
            .load(self.api.as_ref(), symbol)
            .await
    }

    /// The alert rule for a symbol.
    pub async fn rule(&self, symbol: &str) -> Result<Rule, CoreError> {
        self.rule_service.load(self.api.as_ref(), symbol).await
    }

    /// Enable or disable a symbol's rule.
    pub async fn set_rule_enabled(&self, symbol: &str, enabled: bool) -> Result<Rule, CoreError> {
        self.rule_service
            .set_enabled(self.api.as_ref(), symbol, enabled)
            .await
    }

    /// Apply a rule edit against the currently displayed rule. Threshold
    /// edits on a disabled rule are rejected without a request.
    pub async fn update_rule(
        &self,
        symbol: &str,
        current: &Rule,
        patch: RuleUpdate,
    ) -> Result<Rule, CoreError> {
        self.rule_service
            .apply(self.api.as_ref(), symbol, current, patch)
            .await
    }

    /// The daily-reports page, dates formatted for the active locale.
    pub async fn daily_reports(&self) -> Result<DailyReportsView, CoreError> {
        self.daily_service
            .load(self.api.as_ref(), self.language.locale())
            .await
    }

    // ── Preferences ─────────────────────────────────────────────────

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Serialize preferences for the host to persist. Clears the
    /// unsaved-changes flag.
    pub fn export_preferences(&mut self) -> Result<Vec<u8>, CoreError> {
        let bytes = PreferencesStore::to_bytes(&self.preferences)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Save preferences to a file on disk (native only). Clears the
    /// unsaved-changes flag.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_preferences_file(&mut self, path: &str) -> Result<(), CoreError> {
        PreferencesStore::save_to_file(&self.preferences, path)?;
        self.dirty = false;
        Ok(())
    }

    /// Returns `true` if preferences changed since the last export/save.
    #[must_use]
    pub fn has_unsaved_preferences(&self) -> bool {
        self.dirty
    }
}
