//! Integration tests for [`storage::SavedChartRepository`]: cap cleanup order
//! and ownership checks.

use chrono::{Duration, NaiveDate, Utc};
use storage::{SavedChart, SavedChartRepository, SqlitePoolManager};

async fn test_repo() -> SavedChartRepository {
    let pool = SqlitePoolManager::new("sqlite::memory:")
        .await
        .expect("Failed to create pool");
    SavedChartRepository::new(pool)
        .await
        .expect("Failed to create repository")
}

fn chart(user_id: &str, name: &str, age_secs: i64) -> SavedChart {
    let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
    let mut chart = SavedChart::new(
        user_id,
        name,
        "line",
        "{}".to_string(),
        "{}".to_string(),
        start,
        end,
    );
    chart.created_at = Utc::now() - Duration::seconds(age_secs);
    chart
}

/// **Test: pruning removes the oldest charts first and respects the cap.**
///
/// **Setup:** Five charts at distinct ages.
/// **Action:** `prune_to_cap(user, 3)`.
/// **Expected:** Two deleted, the two oldest gone, three newest remain.
#[tokio::test]
async fn test_prune_removes_oldest_first() {
    let repo = test_repo().await;

    for (name, age) in [("c1", 50), ("c2", 40), ("c3", 30), ("c4", 20), ("c5", 10)] {
        repo.save(&chart("user-1", name, age)).await.expect("save");
    }

    let deleted = repo.prune_to_cap("user-1", 3).await.expect("prune");
    assert_eq!(deleted, 2);

    let remaining = repo.list_for_user("user-1").await.expect("list");
    let names: Vec<&str> = remaining.iter().map(|c| c.chart_name.as_str()).collect();
    assert_eq!(remaining.len(), 3);
    assert!(names.contains(&"c3") && names.contains(&"c4") && names.contains(&"c5"));
}

/// **Test: pruning under the cap deletes nothing.**
#[tokio::test]
async fn test_prune_noop_under_cap() {
    let repo = test_repo().await;

    repo.save(&chart("user-1", "only", 0)).await.expect("save");
    let deleted = repo.prune_to_cap("user-1", 20).await.expect("prune");
    assert_eq!(deleted, 0);
    assert_eq!(repo.count_for_user("user-1").await.expect("count"), 1);
}

/// **Test: pruning one user never touches another user's charts.**
#[tokio::test]
async fn test_prune_scoped_to_user() {
    let repo = test_repo().await;

    for (name, age) in [("a1", 30), ("a2", 20), ("a3", 10)] {
        repo.save(&chart("user-a", name, age)).await.expect("save");
    }
    repo.save(&chart("user-b", "b1", 60)).await.expect("save");

    repo.prune_to_cap("user-a", 1).await.expect("prune");

    assert_eq!(repo.count_for_user("user-a").await.expect("count"), 1);
    assert_eq!(repo.count_for_user("user-b").await.expect("count"), 1);
}

/// **Test: delete requires the owning user and reports whether a row was removed.**
#[tokio::test]
async fn test_delete_requires_owner() {
    let repo = test_repo().await;

    let saved = chart("user-1", "mine", 0);
    repo.save(&saved).await.expect("save");

    assert!(!repo.delete(&saved.id, "user-2").await.expect("delete"));
    assert!(repo.delete(&saved.id, "user-1").await.expect("delete"));
    assert_eq!(repo.count_for_user("user-1").await.expect("count"), 0);
}
