//! Application configuration model.
//!
//! Every field has a default so a partial (or missing) `config.toml` is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::graph::GraphLayout;
use crate::trigger::EffectTrigger;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct MoodConfig {
    #[serde(default)]
    pub tracking: TrackingConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub effects: Vec<EffectTrigger>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrackingConfig {
    /// Length of a tracking session in seconds.
    pub duration_secs: f32,
    /// Interval between samples in milliseconds.
    pub tick_ms: u64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            duration_secs: 5.0,
            tick_ms: 16,
        }
    }
}

impl TrackingConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GraphConfig {
    pub container_width: f32,
    pub y_spacing: f32,
    pub buffer: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            container_width: 400.0,
            y_spacing: GraphLayout::DEFAULT_Y_SPACING,
            buffer: GraphLayout::DEFAULT_BUFFER,
        }
    }
}

impl From<&GraphConfig> for GraphLayout {
    fn from(config: &GraphConfig) -> Self {
        GraphLayout::new(config.container_width)
            .with_y_spacing(config.y_spacing)
            .with_buffer(config.buffer)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct HistoryConfig {
    /// Overrides the default history file location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}
