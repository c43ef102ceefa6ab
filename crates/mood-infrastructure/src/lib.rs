pub mod config_service;
pub mod dto;
pub mod json_mood_history_repository;
pub mod paths;
pub mod replay_source;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::json_mood_history_repository::JsonMoodHistoryRepository;
pub use crate::replay_source::ReplayEmotionSource;
