//! Tracking session aggregator.
//!
//! Runs one bounded-duration session: samples the emotion source once per tick,
//! keeps the running maxima, then classifies the session and appends the
//! resulting record to the history.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use mood_core::emotion::EmotionSource;
use mood_core::error::{MoodError, Result};
use mood_core::mood::{MoodHistoryRepository, MoodLabel, MoodRecord, SessionMaxima};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

use super::calendar::Calendar;
use super::ticker::Ticker;

/// Result of a completed tracking session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub session_id: Uuid,
    /// The record that was appended to the history.
    pub record: MoodRecord,
    pub label: MoodLabel,
    /// Number of samples read during the session.
    pub samples: u64,
}

/// Aggregates emotion samples into daily mood records.
///
/// At most one session runs at a time per aggregator; a second call to
/// [`run_session`](Self::run_session) while one is in flight is rejected with
/// [`MoodError::SessionActive`].
pub struct SessionAggregator {
    source: Arc<dyn EmotionSource>,
    repository: Arc<dyn MoodHistoryRepository>,
    calendar: Arc<dyn Calendar>,
    active: AtomicBool,
}

/// Clears the active flag when the session ends, however it ends.
struct ActiveSession<'a>(&'a AtomicBool);

impl Drop for ActiveSession<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SessionAggregator {
    pub fn new(
        source: Arc<dyn EmotionSource>,
        repository: Arc<dyn MoodHistoryRepository>,
        calendar: Arc<dyn Calendar>,
    ) -> Self {
        Self {
            source,
            repository,
            calendar,
            active: AtomicBool::new(false),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Runs a session for `duration`, then persists and classifies it.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `duration` is zero
    /// - `SessionActive` if another session is running on this aggregator
    /// - `Cancelled` if `cancel` fires first; nothing is appended in that case
    /// - storage errors from the history repository
    pub async fn run_session(
        &self,
        duration: Duration,
        ticker: &mut dyn Ticker,
        cancel: &CancellationToken,
    ) -> Result<SessionOutcome> {
        if duration.is_zero() {
            return Err(MoodError::invalid_argument(
                "Session duration must be greater than zero",
            ));
        }

        let _active = self.begin()?;
        let session_id = Uuid::new_v4();
        let span = tracing::info_span!("tracking_session", %session_id);

        async move {
            tracing::info!(duration_secs = duration.as_secs_f32(), "Tracking started");

            let (maxima, samples) = self.collect(duration, ticker, cancel).await?;

            tracing::info!(
                max_sad = maxima.sad,
                max_surprised = maxima.surprised,
                max_neutral = maxima.neutral,
                samples,
                "Tracking completed"
            );

            let label = maxima.label();
            let record = maxima.into_record(self.calendar.today());
            self.repository.append(&record).await?;

            tracing::info!(%label, day = %record.day, "Mood for the day");

            Ok::<_, MoodError>(SessionOutcome {
                session_id,
                record,
                label,
                samples,
            })
        }
        .instrument(span)
        .await
    }

    /// Converts a duration in (possibly fractional) seconds, rejecting values
    /// that are not strictly positive and finite.
    pub fn duration_from_secs(secs: f32) -> Result<Duration> {
        if !(secs.is_finite() && secs > 0.0) {
            return Err(MoodError::invalid_argument(format!(
                "Session duration must be a positive number of seconds, got {}",
                secs
            )));
        }
        Duration::try_from_secs_f32(secs).map_err(|e| MoodError::invalid_argument(e.to_string()))
    }

    fn begin(&self) -> Result<ActiveSession<'_>> {
        if self.active.swap(true, Ordering::SeqCst) {
            tracing::warn!("Tracking session already active, rejecting new session");
            return Err(MoodError::SessionActive);
        }
        Ok(ActiveSession(&self.active))
    }

    async fn collect(
        &self,
        duration: Duration,
        ticker: &mut dyn Ticker,
        cancel: &CancellationToken,
    ) -> Result<(SessionMaxima, u64)> {
        let mut maxima = SessionMaxima::new();
        let mut elapsed = Duration::ZERO;
        let mut samples = 0u64;

        while elapsed < duration {
            let delta = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::info!(samples, "Tracking cancelled, discarding session");
                    return Err(MoodError::Cancelled);
                }
                delta = ticker.tick() => delta,
            };
            elapsed += delta;

            let sample = self.source.sample();
            maxima.observe(&sample);
            samples += 1;

            tracing::debug!(
                raw_sad = sample.sad,
                scaled_sad = mood_core::mood::scale_sadness(sample.sad),
                surprised = sample.surprised,
                neutral = sample.neutral,
                "Sample"
            );
        }

        Ok((maxima, samples))
    }
}
