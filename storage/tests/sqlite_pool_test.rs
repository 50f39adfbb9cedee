//! Tests for [`storage::SqlitePoolManager`] against a file-backed database.

use storage::{MoodRecordRepository, SqlitePoolManager};

/// **Test: a missing database file is created and survives reconnection.**
///
/// **Setup:** Temp directory with no database file.
/// **Action:** Open a pool, create the records table, drop the pool, reopen.
/// **Expected:** The file exists and the table is still there.
#[tokio::test]
async fn test_file_backed_pool_creates_and_persists() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("doran-test.db");
    let url = db_path.to_str().expect("utf-8 path");

    {
        let pool = SqlitePoolManager::new(url).await.expect("Failed to create pool");
        MoodRecordRepository::new(pool)
            .await
            .expect("Failed to create repository");
    }
    assert!(db_path.exists());

    let pool = SqlitePoolManager::new(url).await.expect("Failed to reopen pool");
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM records")
        .fetch_one(pool.pool())
        .await
        .expect("records table missing after reopen");
    assert_eq!(count.0, 0);
}

/// **Test: in-memory URL yields a working empty database.**
#[tokio::test]
async fn test_in_memory_pool() {
    let pool = SqlitePoolManager::new("sqlite::memory:")
        .await
        .expect("Failed to create pool");
    let one: (i64,) = sqlx::query_as("SELECT 1")
        .fetch_one(pool.pool())
        .await
        .expect("query");
    assert_eq!(one.0, 1);
}
