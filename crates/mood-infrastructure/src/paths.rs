//! Unified path management for moodtrack files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/moodtrack/          # Config directory
//! ├── config.toml               # Application configuration
//! └── logs/                     # Application logs
//!     └── moodtrack.log.YYYY-MM-DD
//!
//! ~/.local/share/moodtrack/     # Data directory
//! └── moodData.json             # Mood history
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "moodtrack";
const HISTORY_FILE: &str = "moodData.json";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for mood_core::MoodError {
    fn from(err: PathError) -> Self {
        mood_core::MoodError::config(err.to_string())
    }
}

/// Platform-specific locations (XDG on Linux, the native equivalents elsewhere).
pub struct MoodPaths;

impl MoodPaths {
    /// Returns the configuration directory (e.g. `~/.config/moodtrack/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the data directory (e.g. `~/.local/share/moodtrack/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Returns the default mood history file.
    pub fn history_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join(HISTORY_FILE))
    }

    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let config_file = MoodPaths::config_file().unwrap();
        assert!(config_file.ends_with("moodtrack/config.toml"));
        assert!(config_file.starts_with(MoodPaths::config_dir().unwrap()));
    }

    #[test]
    fn test_history_file() {
        let history_file = MoodPaths::history_file().unwrap();
        assert!(history_file.ends_with("moodData.json"));
        assert!(history_file.starts_with(MoodPaths::data_dir().unwrap()));
    }

    #[test]
    fn test_logs_dir() {
        let logs_dir = MoodPaths::logs_dir().unwrap();
        assert!(logs_dir.ends_with("logs"));
        assert!(logs_dir.starts_with(MoodPaths::config_dir().unwrap()));
    }
}
