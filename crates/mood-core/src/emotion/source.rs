//! Emotion source trait.

use super::model::EmotionSample;

/// A pull-based accessor for the latest emotion intensities.
///
/// Implementations are expected to refresh their value at least once per
/// scheduling tick. Reading never fails: a source that has nothing new to
/// report returns its last known sample.
pub trait EmotionSource: Send + Sync {
    /// Returns the current intensities.
    fn sample(&self) -> EmotionSample;
}

impl<F> EmotionSource for F
where
    F: Fn() -> EmotionSample + Send + Sync,
{
    fn sample(&self) -> EmotionSample {
        self()
    }
}
