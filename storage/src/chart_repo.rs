//! Saved chart repository: insert, per-user cap cleanup, delete.

use crate::models::SavedChart;
use crate::sqlite_pool::SqlitePoolManager;
use tracing::info;

#[derive(Clone)]
pub struct SavedChartRepository {
    pool_manager: SqlitePoolManager,
}

impl SavedChartRepository {
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
            CREATE TABLE IF NOT EXISTS saved_charts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                chart_name TEXT NOT NULL,
                chart_type TEXT NOT NULL,
                chart_data TEXT NOT NULL,
                chart_config TEXT NOT NULL,
                period_start TEXT NOT NULL,
                period_end TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_saved_charts_user_created ON saved_charts(user_id, created_at)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn save(&self, chart: &SavedChart) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO saved_charts
                (id, user_id, chart_name, chart_type, chart_data, chart_config,
                 period_start, period_end, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&chart.id)
        .bind(&chart.user_id)
        .bind(&chart.chart_name)
        .bind(&chart.chart_type)
        .bind(&chart.chart_data)
        .bind(&chart.chart_config)
        .bind(chart.period_start)
        .bind(chart.period_end)
        .bind(chart.created_at)
        .execute(self.pool_manager.pool())
        .await?;

        info!(chart_id = %chart.id, user_id = %chart.user_id, "Saved chart");
        Ok(())
    }

    pub async fn count_for_user(&self, user_id: &str) -> Result<i64, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM saved_charts WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(self.pool_manager.pool())
                .await?;
        Ok(count.0)
    }

    /// Deletes the user's oldest charts (by creation time, ascending) until at
    /// most `cap` remain. Returns the number of deleted rows.
    pub async fn prune_to_cap(&self, user_id: &str, cap: i64) -> Result<u64, sqlx::Error> {
        let count = self.count_for_user(user_id).await?;
        let excess = count - cap;
        if excess <= 0 {
            return Ok(0);
        }

        let result = sqlx::query(
            r#"
            DELETE FROM saved_charts WHERE id IN (
                SELECT id FROM saved_charts WHERE user_id = ?
                ORDER BY created_at ASC LIMIT ?
            )
            "#,
        )
        .bind(user_id)
        .bind(excess)
        .execute(self.pool_manager.pool())
        .await?;

        info!(
            user_id = %user_id,
            deleted = result.rows_affected(),
            "Pruned saved charts over cap"
        );
        Ok(result.rows_affected())
    }

    /// All charts for a user, newest first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<SavedChart>, sqlx::Error> {
        sqlx::query_as::<_, SavedChart>(
            "SELECT * FROM saved_charts WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool_manager.pool())
        .await
    }

    /// Deletes one chart owned by the user; returns whether a row was removed.
    pub async fn delete(&self, chart_id: &str, user_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM saved_charts WHERE id = ? AND user_id = ?")
            .bind(chart_id)
            .bind(user_id)
            .execute(self.pool_manager.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
