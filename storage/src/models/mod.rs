mod chat_message;
mod mood_record;
mod saved_chart;

pub use chat_message::ChatMessageRecord;
pub use mood_record::MoodRecord;
pub use saved_chart::SavedChart;
