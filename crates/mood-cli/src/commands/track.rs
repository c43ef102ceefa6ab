use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use colored::Colorize;
use mood_application::SessionAggregator;
use mood_application::session::{IntervalTicker, SystemCalendar};
use mood_core::MoodError;
use mood_core::mood::MoodLabel;
use mood_infrastructure::ReplayEmotionSource;
use tokio_util::sync::CancellationToken;

use super::Context;

pub async fn run(
    context: &Context,
    samples: &Path,
    duration: Option<f32>,
    tick_ms: Option<u64>,
) -> Result<()> {
    let source = ReplayEmotionSource::from_file(samples)
        .with_context(|| format!("Failed to read recording {}", samples.display()))?;
    let duration = SessionAggregator::duration_from_secs(
        duration.unwrap_or(context.config.tracking.duration_secs),
    )?;
    let tick = match tick_ms {
        Some(ms) => Duration::from_millis(ms.max(1)),
        None => context.config.tracking.tick_interval(),
    };

    let aggregator = SessionAggregator::new(
        Arc::new(source),
        context.repository(),
        Arc::new(SystemCalendar),
    );

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    println!(
        "Tracking for {:.1}s, one sample every {}ms...",
        duration.as_secs_f32(),
        tick.as_millis()
    );

    let mut ticker = IntervalTicker::new(tick);
    let outcome = match aggregator.run_session(duration, &mut ticker, &cancel).await {
        Ok(outcome) => outcome,
        Err(MoodError::Cancelled) => {
            println!("{}", "Tracking cancelled, nothing was saved.".yellow());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let label = match outcome.label {
        MoodLabel::Bad => outcome.label.to_string().red(),
        MoodLabel::Good => outcome.label.to_string().green(),
        MoodLabel::Neutral => outcome.label.to_string().normal(),
    };
    println!("Your Mood Today is: {}", label.bold());
    println!(
        "  sad {:.2}  surprised {:.2}  neutral {:.2}  ({} samples, saved as {})",
        outcome.record.sad_value,
        outcome.record.surprised_value,
        outcome.record.neutral_value,
        outcome.samples,
        outcome.record.day
    );

    Ok(())
}
