//! Chat message repository: inbound message rows and their one-shot answer update.

use crate::models::ChatMessageRecord;
use crate::sqlite_pool::SqlitePoolManager;
use tracing::info;

#[derive(Clone)]
pub struct ChatMessageRepository {
    pool_manager: SqlitePoolManager,
}

impl ChatMessageRepository {
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
            CREATE TABLE IF NOT EXISTS chat_messages (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                user_chat TEXT NOT NULL,
                ai_answer TEXT,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_chat_messages_user_id ON chat_messages(user_id)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Inserts the inbound message row (`ai_answer` still NULL).
    pub async fn save(&self, message: &ChatMessageRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO chat_messages (id, user_id, user_chat, ai_answer, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.id)
        .bind(&message.user_id)
        .bind(&message.user_chat)
        .bind(&message.ai_answer)
        .bind(message.created_at)
        .execute(self.pool_manager.pool())
        .await?;

        info!(message_id = %message.id, user_id = %message.user_id, "Saved chat message");
        Ok(())
    }

    /// Fills in the computed answer for one message.
    pub async fn set_answer(&self, message_id: &str, answer: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE chat_messages SET ai_answer = ? WHERE id = ?")
            .bind(answer)
            .bind(message_id)
            .execute(self.pool_manager.pool())
            .await?;

        info!(message_id = %message_id, "Updated chat answer");
        Ok(())
    }

    /// Chat history for a user, oldest first.
    pub async fn history_for_user(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<ChatMessageRecord>, sqlx::Error> {
        let messages = sqlx::query_as::<_, ChatMessageRecord>(
            "SELECT * FROM chat_messages WHERE user_id = ? ORDER BY created_at ASC LIMIT ?",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool_manager.pool())
        .await?;

        Ok(messages)
    }

    pub async fn get_by_id(
        &self,
        message_id: &str,
    ) -> Result<Option<ChatMessageRecord>, sqlx::Error> {
        sqlx::query_as::<_, ChatMessageRecord>("SELECT * FROM chat_messages WHERE id = ?")
            .bind(message_id)
            .fetch_optional(self.pool_manager.pool())
            .await
    }
}
