//! Chat message record for persistence.
//!
//! Maps to the `chat_messages` table. One row per inbound request; inserted
//! with `ai_answer = NULL` and updated exactly once with the computed answer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatMessageRecord {
    pub id: String,
    pub user_id: String,
    pub user_chat: String,
    pub ai_answer: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessageRecord {
    /// Creates a new record with a generated UUID, current timestamp, and no answer yet.
    pub fn new(user_id: impl Into<String>, user_chat: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            user_chat: user_chat.into(),
            ai_answer: None,
            created_at: Utc::now(),
        }
    }
}
