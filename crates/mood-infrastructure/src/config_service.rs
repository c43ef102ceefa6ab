//! Configuration service implementation.
//!
//! Loads [`MoodConfig`] from `config.toml` (by default
//! `~/.config/moodtrack/config.toml`). A missing file means "all defaults".

use std::path::{Path, PathBuf};

use mood_core::config::MoodConfig;
use mood_core::error::{MoodError, Result};

use crate::paths::MoodPaths;
use crate::storage::{AtomicFile, FileFormat};

/// Reads and writes the application configuration file.
pub struct ConfigService {
    file: AtomicFile<MoodConfig>,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path, FileFormat::Toml),
        }
    }

    /// Creates a service for the platform default config file.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(MoodPaths::config_file()?))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads the configuration, falling back to defaults when the file is absent.
    pub fn load(&self) -> Result<MoodConfig> {
        match self.file.load() {
            Ok(Some(config)) => {
                tracing::debug!(path = %self.path().display(), "Loaded configuration");
                Ok(config)
            }
            Ok(None) => {
                tracing::debug!(
                    path = %self.path().display(),
                    "No configuration file, using defaults"
                );
                Ok(MoodConfig::default())
            }
            Err(e) => Err(MoodError::config(format!(
                "Failed to load {}: {}",
                self.path().display(),
                e
            ))),
        }
    }

    /// Writes `config` atomically.
    pub fn save(&self, config: &MoodConfig) -> Result<()> {
        self.file.save(config).map_err(|e| {
            MoodError::config(format!("Failed to save {}: {}", self.path().display(), e))
        })
    }

    /// Writes the default configuration unless a file already exists.
    ///
    /// Returns `true` when a new file was written.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path().exists() {
            return Ok(false);
        }
        self.save(&MoodConfig::default())?;
        tracing::info!(path = %self.path().display(), "Wrote default configuration");
        Ok(true)
    }
}
