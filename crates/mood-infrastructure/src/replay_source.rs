//! Emotion sources that replay recorded samples.
//!
//! A recording is a JSON-lines file with one [`EmotionSample`] object per line.
//! Emotions missing from a line read as `0.0`; blank lines are skipped.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use mood_core::emotion::{EmotionSample, EmotionSource};
use mood_core::error::{MoodError, Result};

/// Hands out a fixed sequence of samples, one per read.
///
/// Once the sequence is exhausted the last sample keeps being reported, the
/// way a live recognizer keeps its last reading between frames. An empty
/// sequence reports all-zero samples.
pub struct ReplayEmotionSource {
    samples: Vec<EmotionSample>,
    cursor: Mutex<usize>,
}

impl ReplayEmotionSource {
    pub fn new(samples: Vec<EmotionSample>) -> Self {
        Self {
            samples,
            cursor: Mutex::new(0),
        }
    }

    /// Parses a JSON-lines recording.
    pub fn from_jsonl(content: &str) -> Result<Self> {
        let mut samples = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let sample: EmotionSample = serde_json::from_str(line).map_err(|e| {
                MoodError::invalid_argument(format!("Line {}: {}", line_no + 1, e))
            })?;
            samples.push(sample);
        }
        Ok(Self::new(samples))
    }

    /// Reads a JSON-lines recording from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let source = Self::from_jsonl(&content)?;
        tracing::info!(
            path = %path.display(),
            samples = source.len(),
            "Loaded emotion recording"
        );
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl EmotionSource for ReplayEmotionSource {
    fn sample(&self) -> EmotionSample {
        let Some(last) = self.samples.len().checked_sub(1) else {
            return EmotionSample::default();
        };
        // A poisoned cursor only means a reader panicked mid-increment; keep going.
        let mut cursor = self.cursor.lock().unwrap_or_else(|e| e.into_inner());
        let sample = self.samples[(*cursor).min(last)];
        if *cursor < last {
            *cursor += 1;
        }
        sample
    }
}
