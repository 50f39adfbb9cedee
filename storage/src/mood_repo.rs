//! Mood record repository: journal rows and the date-window query used by the
//! analysis path.

use crate::models::MoodRecord;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::NaiveDate;
use tracing::info;

#[derive(Clone)]
pub struct MoodRecordRepository {
    pool_manager: SqlitePoolManager,
}

impl MoodRecordRepository {
    /// Wraps the shared pool and creates the table if it does not exist.
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self, sqlx::Error> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS records (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                title TEXT NOT NULL,
                notes TEXT NOT NULL,
                fatigue INTEGER NOT NULL,
                emotion TEXT,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_records_user_date ON records(user_id, date)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn save(&self, record: &MoodRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO records (id, user_id, date, title, notes, fatigue, emotion, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(record.date)
        .bind(&record.title)
        .bind(&record.notes)
        .bind(record.fatigue)
        .bind(&record.emotion)
        .bind(record.created_at)
        .execute(self.pool_manager.pool())
        .await?;

        info!(record_id = %record.id, user_id = %record.user_id, "Saved mood record");
        Ok(())
    }

    /// All records for a user with `date` inclusively inside the window,
    /// ascending by date. An empty result is valid, not an error.
    pub async fn find_in_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<MoodRecord>, sqlx::Error> {
        let records = sqlx::query_as::<_, MoodRecord>(
            "SELECT * FROM records WHERE user_id = ? AND date BETWEEN ? AND ? ORDER BY date ASC",
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(self.pool_manager.pool())
        .await?;

        info!(
            user_id = %user_id,
            from = %from,
            to = %to,
            count = records.len(),
            "Fetched mood records in range"
        );
        Ok(records)
    }

    /// All records for a user, newest first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<MoodRecord>, sqlx::Error> {
        sqlx::query_as::<_, MoodRecord>(
            "SELECT * FROM records WHERE user_id = ? ORDER BY date DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool_manager.pool())
        .await
    }

    /// Deletes one record owned by the user; returns the deleted row, or
    /// `None` when no such record exists for that user.
    pub async fn delete(
        &self,
        record_id: &str,
        user_id: &str,
    ) -> Result<Option<MoodRecord>, sqlx::Error> {
        let existing = sqlx::query_as::<_, MoodRecord>(
            "SELECT * FROM records WHERE id = ? AND user_id = ?",
        )
        .bind(record_id)
        .bind(user_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;

        if existing.is_some() {
            sqlx::query("DELETE FROM records WHERE id = ? AND user_id = ?")
                .bind(record_id)
                .bind(user_id)
                .execute(self.pool_manager.pool())
                .await?;
            info!(record_id = %record_id, user_id = %user_id, "Deleted mood record");
        }

        Ok(existing)
    }
}
