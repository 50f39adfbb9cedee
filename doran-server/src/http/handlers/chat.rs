//! POST /chat and GET /chat/history.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::serve::AppState;
use crate::http::Result;
use crate::pipeline::ChatResponse;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub user_id: Option<String>,
    pub recent_messages: Option<Vec<String>>,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let message = body.message.as_deref().map(str::trim).unwrap_or("");
    if message.is_empty() {
        return Err(ApiError::BadRequest("message is required".to_string()));
    }
    let user_id = body
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("user_id is required".to_string()))?;

    let recent_messages = body.recent_messages.clone().unwrap_or_default();
    let response = state
        .pipeline
        .handle(user_id, message, &recent_messages)
        .await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub chat_history: Vec<HistoryEntry>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub user_chat: String,
    pub ai_answer: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<HistoryResponse>> {
    let user_id = query
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("user_id is required".to_string()))?;

    let messages = state.chat_repo.history_for_user(user_id, 100).await?;
    let chat_history: Vec<HistoryEntry> = messages
        .into_iter()
        .map(|m| HistoryEntry {
            user_chat: m.user_chat,
            ai_answer: m.ai_answer,
            created_at: m.created_at,
        })
        .collect();
    let count = chat_history.len();

    Ok(Json(HistoryResponse {
        chat_history,
        count,
    }))
}
