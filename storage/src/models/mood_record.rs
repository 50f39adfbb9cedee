//! Mood/journal record model.
//!
//! Maps to the `records` table. Created through the recording endpoint and
//! read-only to the chat pipeline. `fatigue` is on the canonical 0–5 scale.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MoodRecord {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub title: String,
    pub notes: String,
    pub fatigue: i64,
    pub emotion: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MoodRecord {
    pub fn new(
        user_id: impl Into<String>,
        date: NaiveDate,
        title: impl Into<String>,
        notes: impl Into<String>,
        fatigue: i64,
        emotion: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            date,
            title: title.into(),
            notes: notes.into(),
            fatigue,
            emotion,
            created_at: Utc::now(),
        }
    }
}
