use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

use crate::api::traits::StockApi;
use crate::errors::CoreError;
use crate::i18n::Locale;
use crate::models::report::DailyReport;

/// Builds the daily-reports page. The backend returns reports newest-first
/// (capped at thirty); the first one gets the "Latest" badge.
pub struct DailyReportService;

impl DailyReportService {
    pub fn new() -> Self {
        Self
    }

    pub async fn load(
        &self,
        api: &dyn StockApi,
        locale: Locale,
    ) -> Result<DailyReportsView, CoreError> {
        let reports = api.daily_reports().await?;
        let cards = reports
            .into_iter()
            .enumerate()
            .map(|(i, report)| {
                let date_display = format_report_date(locale, &report.date_yyyymmdd);
                let generated_display = format_generated_at(report.created_at);
                ReportCard {
                    is_latest: i == 0,
                    date_display,
                    generated_display,
                    report,
                }
            })
            .collect();
        Ok(DailyReportsView { cards })
    }
}

impl Default for DailyReportService {
    fn default() -> Self {
        Self::new()
    }
}

/// The daily-reports page as data.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReportsView {
    pub cards: Vec<ReportCard>,
}

impl DailyReportsView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// One report plus its locale-formatted header strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCard {
    pub report: DailyReport,
    pub is_latest: bool,
    pub date_display: String,
    pub generated_display: String,
}

// ── Locale-aware formatting ─────────────────────────────────────────

/// Long-form report date: "Monday, January 5, 2026" / "2026年1月5日 星期一".
/// A date string that does not parse is shown raw rather than erroring.
pub fn format_report_date(locale: Locale, yyyymmdd: &str) -> String {
    let Ok(date) = NaiveDate::parse_from_str(yyyymmdd, "%Y%m%d") else {
        return yyyymmdd.to_string();
    };
    match locale {
        Locale::En => date.format("%A, %B %-d, %Y").to_string(),
        Locale::Zh => format!(
            "{}年{}月{}日 {}",
            date.year(),
            date.month(),
            date.day(),
            weekday_zh(date.weekday())
        ),
    }
}

/// Time-of-day a report was generated, shown under the date.
pub fn format_generated_at(ts: DateTime<Utc>) -> String {
    ts.format("%H:%M:%S").to_string()
}

fn weekday_zh(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}
