use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An AI-generated daily portfolio summary. Read-only; the backend returns
/// these newest-first, capped at thirty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub id: i64,

    /// Report date as `YYYYMMDD` (e.g., "20260105")
    pub date_yyyymmdd: String,

    /// Full report text
    pub content: String,

    pub created_at: DateTime<Utc>,
}
