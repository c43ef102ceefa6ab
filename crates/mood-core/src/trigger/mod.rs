//! Effect triggers keyed to live emotion values.
//!
//! Each [`EffectTrigger`] watches one emotion. While the board is enabled, an
//! effect starts as soon as its emotion reaches the threshold and stops as soon
//! as it drops below. Triggers are independent and have no hysteresis.

use serde::{Deserialize, Serialize};

use crate::emotion::{Emotion, EmotionSample};

/// Binds an emotion to a visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectTrigger {
    pub emotion: Emotion,
    #[serde(default = "EffectTrigger::default_threshold")]
    pub threshold: f32,
}

impl EffectTrigger {
    pub const DEFAULT_THRESHOLD: f32 = 0.7;

    pub fn new(emotion: Emotion, threshold: f32) -> Self {
        Self { emotion, threshold }
    }

    fn default_threshold() -> f32 {
        Self::DEFAULT_THRESHOLD
    }

    /// Whether `sample` reaches this trigger's threshold (inclusive).
    pub fn is_reached(&self, sample: &EmotionSample) -> bool {
        sample.get(self.emotion) >= self.threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    Start,
    Stop,
}

/// A change in an effect's playing state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectTransition {
    /// Position of the trigger on the board.
    pub index: usize,
    pub emotion: Emotion,
    pub kind: TransitionKind,
}

/// Tracks the playing state of a set of effect triggers.
#[derive(Debug, Clone, Default)]
pub struct EffectTriggerBoard {
    triggers: Vec<EffectTrigger>,
    playing: Vec<bool>,
    enabled: bool,
}

impl EffectTriggerBoard {
    /// Creates a disabled board with nothing playing.
    pub fn new(triggers: Vec<EffectTrigger>) -> Self {
        let playing = vec![false; triggers.len()];
        Self {
            triggers,
            playing,
            enabled: false,
        }
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stops evaluating triggers. Effects already playing are left as they are.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn triggers(&self) -> &[EffectTrigger] {
        &self.triggers
    }

    pub fn is_playing(&self, index: usize) -> bool {
        self.playing.get(index).copied().unwrap_or(false)
    }

    /// Evaluates every trigger against `sample` and returns the state changes.
    pub fn update(&mut self, sample: &EmotionSample) -> Vec<EffectTransition> {
        if !self.enabled {
            return Vec::new();
        }

        let mut transitions = Vec::new();
        for (index, (trigger, playing)) in
            self.triggers.iter().zip(self.playing.iter_mut()).enumerate()
        {
            let reached = trigger.is_reached(sample);
            let kind = match (reached, *playing) {
                (true, false) => TransitionKind::Start,
                (false, true) => TransitionKind::Stop,
                _ => continue,
            };
            *playing = reached;
            tracing::debug!(
                emotion = %trigger.emotion,
                threshold = trigger.threshold,
                value = sample.get(trigger.emotion),
                ?kind,
                "Effect trigger changed state"
            );
            transitions.push(EffectTransition {
                index,
                emotion: trigger.emotion,
                kind,
            });
        }
        transitions
    }
}
