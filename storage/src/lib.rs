//! Storage crate: SQLite persistence for the chat pipeline.
//!
//! ## Modules
//!
//! - [`models`] – ChatMessageRecord, MoodRecord, SavedChart
//! - [`chat_repo`] – ChatMessageRepository (inbound message + answer update)
//! - [`mood_repo`] – MoodRecordRepository (journal records, range queries)
//! - [`chart_repo`] – SavedChartRepository (generated charts, count-capped)
//! - [`sqlite_pool`] – SqlitePoolManager

mod chat_repo;
mod chart_repo;
mod models;
mod mood_repo;
mod sqlite_pool;

pub use chat_repo::ChatMessageRepository;
pub use chart_repo::SavedChartRepository;
pub use models::{ChatMessageRecord, MoodRecord, SavedChart};
pub use mood_repo::MoodRecordRepository;
pub use sqlite_pool::SqlitePoolManager;
