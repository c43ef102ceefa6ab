//! Emotion domain model.
//!
//! An [`EmotionSample`] is one tick's worth of intensities reported by the
//! recognition model, one value per [`Emotion`], each in `[0, 1]`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The emotion categories reported by the recognition model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Emotion {
    Angry,
    Disgust,
    Happy,
    Neutral,
    Sad,
    Scared,
    Surprised,
}

/// Intensities for every emotion at a single tick.
///
/// Missing fields deserialize to `0.0`, so recorded streams only need to carry
/// the emotions they care about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionSample {
    pub angry: f32,
    pub disgust: f32,
    pub happy: f32,
    pub neutral: f32,
    pub sad: f32,
    pub scared: f32,
    pub surprised: f32,
}

impl EmotionSample {
    /// Returns the intensity reported for `emotion`.
    pub fn get(&self, emotion: Emotion) -> f32 {
        match emotion {
            Emotion::Angry => self.angry,
            Emotion::Disgust => self.disgust,
            Emotion::Happy => self.happy,
            Emotion::Neutral => self.neutral,
            Emotion::Sad => self.sad,
            Emotion::Scared => self.scared,
            Emotion::Surprised => self.surprised,
        }
    }

    /// Returns a copy of this sample with `emotion` set to `value`.
    pub fn with(mut self, emotion: Emotion, value: f32) -> Self {
        let slot = match emotion {
            Emotion::Angry => &mut self.angry,
            Emotion::Disgust => &mut self.disgust,
            Emotion::Happy => &mut self.happy,
            Emotion::Neutral => &mut self.neutral,
            Emotion::Sad => &mut self.sad,
            Emotion::Scared => &mut self.scared,
            Emotion::Surprised => &mut self.surprised,
        };
        *slot = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_emotion_parses_case_insensitively() {
        assert_eq!(Emotion::from_str("surprised").unwrap(), Emotion::Surprised);
        assert_eq!(Emotion::from_str("SAD").unwrap(), Emotion::Sad);
        assert!(Emotion::from_str("bored").is_err());
    }

    #[test]
    fn test_with_and_get_cover_every_emotion() {
        for (i, emotion) in Emotion::iter().enumerate() {
            let value = (i as f32 + 1.0) / 10.0;
            let sample = EmotionSample::default().with(emotion, value);
            assert_eq!(sample.get(emotion), value);
            for other in Emotion::iter().filter(|e| *e != emotion) {
                assert_eq!(sample.get(other), 0.0);
            }
        }
    }

    #[test]
    fn test_sample_missing_fields_default_to_zero() {
        let sample: EmotionSample = serde_json::from_str(r#"{"sad": 0.4}"#).unwrap();
        assert_eq!(sample.sad, 0.4);
        assert_eq!(sample.surprised, 0.0);
        assert_eq!(sample.neutral, 0.0);
    }
}
