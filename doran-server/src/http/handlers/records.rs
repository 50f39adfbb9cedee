//! Record CRUD: GET /record, POST /record, DELETE /record/:record_id.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use storage::MoodRecord;

use crate::http::error::ApiError;
use crate::http::handlers::chat::UserQuery;
use crate::http::serve::AppState;
use crate::http::Result;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<MoodRecord>>> {
    let user_id = require_user_id(query.user_id.as_deref())?;
    let records = state.mood_repo.list_for_user(user_id).await?;
    Ok(Json(records))
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub user_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub fatigue: Option<i64>,
    pub emotion: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveRecordResponse {
    pub success: bool,
    pub record: MoodRecord,
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateRecordRequest>,
) -> Result<Json<SaveRecordResponse>> {
    let user_id = require_user_id(body.user_id.as_deref())?;
    let date = body
        .date
        .ok_or_else(|| ApiError::BadRequest("date is required".to_string()))?;
    let title = body
        .title
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("title is required".to_string()))?;
    let fatigue = body
        .fatigue
        .ok_or_else(|| ApiError::BadRequest("fatigue is required".to_string()))?;
    if !(0..=5).contains(&fatigue) {
        return Err(ApiError::BadRequest(
            "fatigue must be between 0 and 5".to_string(),
        ));
    }

    let record = MoodRecord::new(
        user_id,
        date,
        title,
        body.notes.unwrap_or_default(),
        fatigue,
        body.emotion,
    );
    state.mood_repo.save(&record).await?;

    Ok(Json(SaveRecordResponse {
        success: true,
        record,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecordResponse {
    pub success: bool,
    pub deleted_record: MoodRecord,
}

pub async fn remove(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    Query(query): Query<UserQuery>,
) -> Result<Json<DeleteRecordResponse>> {
    let user_id = require_user_id(query.user_id.as_deref())?;
    let deleted = state
        .mood_repo
        .delete(&record_id, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Record not found".to_string()))?;

    Ok(Json(DeleteRecordResponse {
        success: true,
        deleted_record: deleted,
    }))
}

fn require_user_id(user_id: Option<&str>) -> Result<&str, ApiError> {
    user_id
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("user_id is required".to_string()))
}
