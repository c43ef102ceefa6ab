//! Mood domain model.
//!
//! A tracking session reduces a stream of [`EmotionSample`]s to three maxima
//! ([`SessionMaxima`]), which are persisted as a [`MoodRecord`] and classified
//! into a coarse [`MoodLabel`].

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::emotion::EmotionSample;

/// Raw sadness at which the scaled value reaches `1.0`.
///
/// The recognition model rarely reports sadness much above this, so raw values
/// are divided by it before tracking.
pub const SAD_SCALE: f32 = 0.5;

/// Threshold a scaled maximum must exceed to dominate the classification.
const DOMINANT_THRESHOLD: f32 = 0.5;

/// Coarse daily mood derived from a session's maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoodLabel {
    Bad,
    Good,
    Neutral,
}

/// The persisted outcome of one tracking session.
///
/// All values are maxima observed during the session. `sad_value` is already
/// scaled by [`SAD_SCALE`] and may exceed `1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    /// Day-of-week name the session finished on (e.g. `"Monday"`).
    pub day: String,
    pub sad_value: f32,
    pub surprised_value: f32,
    pub neutral_value: f32,
}

impl MoodRecord {
    pub fn new(
        day: impl Into<String>,
        sad_value: f32,
        surprised_value: f32,
        neutral_value: f32,
    ) -> Self {
        Self {
            day: day.into(),
            sad_value,
            surprised_value,
            neutral_value,
        }
    }

    /// Classifies the maxima carried by this record.
    pub fn label(&self) -> MoodLabel {
        classify(self.sad_value, self.surprised_value, self.neutral_value)
    }
}

/// Running maxima over a tracking session.
///
/// Starts at zero and only ever moves up: a single spike sets the maximum for
/// the rest of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionMaxima {
    pub sad: f32,
    pub surprised: f32,
    pub neutral: f32,
}

impl SessionMaxima {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one sample into the maxima, scaling sadness first.
    pub fn observe(&mut self, sample: &EmotionSample) {
        let sad_scaled = scale_sadness(sample.sad);

        if sad_scaled > self.sad {
            self.sad = sad_scaled;
        }
        if sample.surprised > self.surprised {
            self.surprised = sample.surprised;
        }
        if sample.neutral > self.neutral {
            self.neutral = sample.neutral;
        }
    }

    pub fn label(&self) -> MoodLabel {
        classify(self.sad, self.surprised, self.neutral)
    }

    /// Freezes the maxima into a record tagged with `day`.
    pub fn into_record(self, day: impl Into<String>) -> MoodRecord {
        MoodRecord::new(day, self.sad, self.surprised, self.neutral)
    }
}

/// Scales a raw sadness reading so that [`SAD_SCALE`] maps to `1.0`.
pub fn scale_sadness(raw: f32) -> f32 {
    raw / SAD_SCALE
}

/// Classifies session maxima into a mood.
///
/// The checks run in a fixed order with strict comparisons, so equal maxima
/// always fall through to [`MoodLabel::Neutral`].
pub fn classify(max_sad: f32, max_surprised: f32, max_neutral: f32) -> MoodLabel {
    if max_sad > DOMINANT_THRESHOLD && max_sad > max_surprised {
        MoodLabel::Bad
    } else if max_surprised > DOMINANT_THRESHOLD && max_surprised > max_sad {
        MoodLabel::Good
    } else if max_neutral < DOMINANT_THRESHOLD {
        if max_sad > max_surprised && max_sad > max_neutral {
            MoodLabel::Bad
        } else if max_surprised > max_sad && max_surprised > max_neutral {
            MoodLabel::Good
        } else {
            MoodLabel::Neutral
        }
    } else {
        MoodLabel::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_reference_cases() {
        assert_eq!(classify(0.6, 0.3, 0.1), MoodLabel::Bad);
        assert_eq!(classify(0.3, 0.6, 0.1), MoodLabel::Good);
        assert_eq!(classify(0.3, 0.3, 0.9), MoodLabel::Neutral);
        assert_eq!(classify(0.5, 0.5, 0.5), MoodLabel::Neutral);
    }

    #[test]
    fn test_classify_equal_maxima_are_neutral() {
        for v in [0.0, 0.2, 0.5, 0.7, 1.0, 1.8] {
            assert_eq!(classify(v, v, v), MoodLabel::Neutral, "value {}", v);
        }
        // sad and surprised tied above the dominant threshold
        assert_eq!(classify(0.9, 0.9, 0.1), MoodLabel::Neutral);
    }

    #[test]
    fn test_classify_low_values_compare_against_neutral() {
        // nothing above 0.5, neutral low: the strict winner decides
        assert_eq!(classify(0.4, 0.2, 0.3), MoodLabel::Bad);
        assert_eq!(classify(0.2, 0.4, 0.3), MoodLabel::Good);
        // winner does not beat neutral
        assert_eq!(classify(0.3, 0.2, 0.4), MoodLabel::Neutral);
        // tie with neutral
        assert_eq!(classify(0.4, 0.2, 0.4), MoodLabel::Neutral);
    }

    #[test]
    fn test_classify_high_neutral_masks_weak_emotions() {
        assert_eq!(classify(0.45, 0.1, 0.5), MoodLabel::Neutral);
        assert_eq!(classify(0.1, 0.45, 0.8), MoodLabel::Neutral);
    }

    #[test]
    fn test_classify_dominant_sad_ignores_neutral() {
        assert_eq!(classify(0.51, 0.5, 1.0), MoodLabel::Bad);
        assert_eq!(classify(0.5, 0.51, 1.0), MoodLabel::Good);
    }

    #[test]
    fn test_label_display_is_lowercase() {
        assert_eq!(MoodLabel::Bad.to_string(), "bad");
        assert_eq!(MoodLabel::Good.to_string(), "good");
        assert_eq!(MoodLabel::Neutral.to_string(), "neutral");
    }

    #[test]
    fn test_maxima_keep_spikes_and_scale_sadness() {
        let mut maxima = SessionMaxima::new();
        maxima.observe(&EmotionSample {
            sad: 0.1,
            surprised: 0.9,
            neutral: 0.2,
            ..Default::default()
        });
        maxima.observe(&EmotionSample {
            sad: 0.3,
            surprised: 0.1,
            neutral: 0.4,
            ..Default::default()
        });
        maxima.observe(&EmotionSample::default());

        assert!((maxima.sad - 0.6).abs() < 1e-6);
        assert_eq!(maxima.surprised, 0.9);
        assert_eq!(maxima.neutral, 0.4);
        assert_eq!(maxima.label(), MoodLabel::Good);
    }

    #[test]
    fn test_into_record_carries_maxima() {
        let mut maxima = SessionMaxima::new();
        maxima.observe(&EmotionSample {
            sad: 0.4,
            surprised: 0.2,
            neutral: 0.3,
            ..Default::default()
        });
        let record = maxima.into_record("Tuesday");
        assert_eq!(record.day, "Tuesday");
        assert!((record.sad_value - 0.8).abs() < 1e-6);
        assert_eq!(record.surprised_value, 0.2);
        assert_eq!(record.neutral_value, 0.3);
        assert_eq!(record.label(), MoodLabel::Bad);
    }
}
