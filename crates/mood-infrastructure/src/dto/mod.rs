//! Data transfer objects for persisted documents.

mod mood_history;

pub use mood_history::{MoodHistoryDto, MoodRecordDto};
