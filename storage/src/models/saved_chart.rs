//! Saved chart model.
//!
//! Maps to the `saved_charts` table. Inserted after chart synthesis; the
//! per-user count is capped and the oldest rows beyond the cap are deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SavedChart {
    pub id: String,
    pub user_id: String,
    pub chart_name: String,
    pub chart_type: String,
    /// Serialized chart data (JSON text).
    pub chart_data: String,
    /// Serialized chart options (JSON text).
    pub chart_config: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl SavedChart {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: impl Into<String>,
        chart_name: impl Into<String>,
        chart_type: impl Into<String>,
        chart_data: String,
        chart_config: String,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            chart_name: chart_name.into(),
            chart_type: chart_type.into(),
            chart_data,
            chart_config,
            period_start,
            period_end,
            created_at: Utc::now(),
        }
    }
}
