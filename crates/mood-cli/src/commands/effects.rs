use std::path::Path;

use anyhow::{Context as _, Result, bail};
use colored::Colorize;
use mood_core::emotion::{Emotion, EmotionSource};
use mood_core::trigger::{EffectTrigger, EffectTriggerBoard, TransitionKind};
use mood_infrastructure::ReplayEmotionSource;

use super::Context;

/// Parses `EMOTION=THRESHOLD`, or a bare `EMOTION` for the default threshold.
pub fn parse_trigger(value: &str) -> Result<EffectTrigger, String> {
    let (name, threshold) = match value.split_once('=') {
        Some((name, threshold)) => {
            let threshold: f32 = threshold
                .trim()
                .parse()
                .map_err(|e| format!("invalid threshold '{}': {}", threshold, e))?;
            (name, threshold)
        }
        None => (value, EffectTrigger::DEFAULT_THRESHOLD),
    };
    let emotion: Emotion = name
        .trim()
        .parse()
        .map_err(|_| format!("unknown emotion '{}'", name))?;
    Ok(EffectTrigger::new(emotion, threshold))
}

pub fn run(context: &Context, samples: &Path, triggers: Vec<EffectTrigger>) -> Result<()> {
    let triggers = if triggers.is_empty() {
        context.config.effects.clone()
    } else {
        triggers
    };
    if triggers.is_empty() {
        bail!("No effect triggers given; pass --trigger EMOTION=THRESHOLD or configure [[effects]]");
    }

    let source = ReplayEmotionSource::from_file(samples)
        .with_context(|| format!("Failed to read recording {}", samples.display()))?;

    let mut board = EffectTriggerBoard::new(triggers);
    board.enable();

    for tick in 0..source.len() {
        let sample = source.sample();
        for transition in board.update(&sample) {
            let kind = match transition.kind {
                TransitionKind::Start => "start".green(),
                TransitionKind::Stop => "stop".red(),
            };
            println!(
                "sample {:>4}: {} {} effect ({:.2})",
                tick + 1,
                kind,
                transition.emotion,
                sample.get(transition.emotion)
            );
        }
    }

    let playing: Vec<String> = board
        .triggers()
        .iter()
        .enumerate()
        .filter(|(i, _)| board.is_playing(*i))
        .map(|(_, trigger)| trigger.emotion.to_string())
        .collect();
    if playing.is_empty() {
        println!("No effects playing at the end of the recording.");
    } else {
        println!("Still playing: {}", playing.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trigger() {
        assert_eq!(
            parse_trigger("surprised=0.6").unwrap(),
            EffectTrigger::new(Emotion::Surprised, 0.6)
        );
        assert_eq!(
            parse_trigger("Sad").unwrap(),
            EffectTrigger::new(Emotion::Sad, EffectTrigger::DEFAULT_THRESHOLD)
        );
        assert!(parse_trigger("bored=0.5").is_err());
        assert!(parse_trigger("happy=lots").is_err());
    }
}
