use std::ops::RangeInclusive;

use crate::api::traits::StockApi;
use crate::errors::CoreError;
use crate::models::rule::{Rule, RuleUpdate};

/// Editable threshold bounds, matching the slider ranges of the rule panel.
pub const RISK_GE_RANGE: RangeInclusive<f64> = 0.0..=10.0;
pub const SENTIMENT_LE_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const HOT_GE_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const CHANGE_ABS_GE_RANGE: RangeInclusive<f64> = 0.0..=20.0;

/// The alert-rule editor. Reads the full rule, sends partial PATCHes, and
/// hands back the server's response as the new local truth.
///
/// The guard the UI encodes by graying the sliders out lives here too:
/// while a rule is disabled, threshold edits are rejected client-side and
/// no PATCH is issued. Toggling `enabled` is always allowed.
pub struct RuleService;

impl RuleService {
    pub fn new() -> Self {
        Self
    }

    pub async fn load(&self, api: &dyn StockApi, symbol: &str) -> Result<Rule, CoreError> {
        api.rule(&normalize(symbol)).await
    }

    /// Flip the rule on or off.
    pub async fn set_enabled(
        &self,
        api: &dyn StockApi,
        symbol: &str,
        enabled: bool,
    ) -> Result<Rule, CoreError> {
        let patch = RuleUpdate {
            enabled: Some(enabled),
            ..RuleUpdate::default()
        };
        api.update_rule(&normalize(symbol), &patch).await
    }

    /// Apply an edit against the currently displayed rule.
    ///
    /// `current` is the rule the controls were rendered from; it decides
    /// whether threshold edits are even allowed. A patch that re-enables
    /// the rule may carry threshold changes in the same request.
    pub async fn apply(
        &self,
        api: &dyn StockApi,
        symbol: &str,
        current: &Rule,
        patch: RuleUpdate,
    ) -> Result<Rule, CoreError> {
        if patch.is_empty() {
            return Err(CoreError::ValidationError(
                "Rule update has no fields to change".into(),
            ));
        }
        if patch.touches_thresholds() && !current.enabled && patch.enabled != Some(true) {
            return Err(CoreError::ValidationError(
                "Rule is disabled; enable it before editing thresholds".into(),
            ));
        }
        validate_thresholds(&patch)?;
        api.update_rule(&normalize(symbol), &patch).await
    }
}

impl Default for RuleService {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

fn validate_thresholds(patch: &RuleUpdate) -> Result<(), CoreError> {
    check_range("risk_ge", patch.risk_ge, &RISK_GE_RANGE)?;
    check_range("sentiment_le", patch.sentiment_le, &SENTIMENT_LE_RANGE)?;
    check_range("hot_ge", patch.hot_ge, &HOT_GE_RANGE)?;
    check_range("change_abs_ge", patch.change_abs_ge, &CHANGE_ABS_GE_RANGE)?;
    Ok(())
}

fn check_range(
    field: &str,
    value: Option<f64>,
    range: &RangeInclusive<f64>,
) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.is_finite() || !range.contains(&v) => {
            Err(CoreError::ValidationError(format!(
                "{field} must be between {} and {}, got {v}",
                range.start(),
                range.end()
            )))
        }
        _ => Ok(()),
    }
}
