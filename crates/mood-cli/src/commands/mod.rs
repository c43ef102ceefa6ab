pub mod classify;
pub mod effects;
pub mod graph;
pub mod history;
pub mod track;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use mood_core::config::MoodConfig;
use mood_infrastructure::paths::MoodPaths;
use mood_infrastructure::{ConfigService, JsonMoodHistoryRepository};

/// Resolved configuration shared by the commands.
pub struct Context {
    pub config: MoodConfig,
    pub history_path: PathBuf,
}

impl Context {
    /// Loads the configuration and resolves the history file.
    ///
    /// The history file comes from `history_override`, then the configured
    /// `[history] file`, then the platform data directory.
    pub fn load(config_path: Option<PathBuf>, history_override: Option<PathBuf>) -> Result<Self> {
        let service = match config_path {
            Some(path) => ConfigService::new(path),
            None => {
                let service = ConfigService::default_location()?;
                service.ensure_exists()?;
                service
            }
        };
        let config = service
            .load()
            .with_context(|| format!("Failed to load config from {}", service.path().display()))?;

        let history_path = match history_override.or_else(|| config.history.file.clone()) {
            Some(path) => path,
            None => MoodPaths::history_file()?,
        };
        tracing::debug!(history = %history_path.display(), "Resolved history file");

        Ok(Self {
            config,
            history_path,
        })
    }

    pub fn repository(&self) -> Arc<JsonMoodHistoryRepository> {
        Arc::new(JsonMoodHistoryRepository::new(self.history_path.clone()))
    }
}
