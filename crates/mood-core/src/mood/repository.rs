//! Mood history repository trait.
//!
//! Defines the interface for persisting completed session records.

use async_trait::async_trait;

use super::model::MoodRecord;
use crate::error::Result;

/// Number of records the history graph shows.
pub const RECENT_WINDOW: usize = 5;

/// An append-only store of [`MoodRecord`]s.
///
/// Insertion order is chronological order. There is no update or delete path.
///
/// # Implementation Notes
///
/// Implementations must distinguish "nothing has ever been stored" (`Ok(None)`)
/// from an existing but empty history (`Ok(Some(vec![]))`), and must report
/// unreadable data as an error rather than an empty history.
#[async_trait]
pub trait MoodHistoryRepository: Send + Sync {
    /// Appends a record after the existing history.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The full history including `record` was persisted
    /// - `Err(_)`: The history could not be read or written
    async fn append(&self, record: &MoodRecord) -> Result<()>;

    /// Returns the last `min(n, len)` records in chronological order.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(records))`: History exists
    /// - `Ok(None)`: No history has been stored yet
    /// - `Err(_)`: History exists but could not be read
    async fn load_recent(&self, n: usize) -> Result<Option<Vec<MoodRecord>>>;

    /// Returns the whole history in chronological order.
    async fn load_all(&self) -> Result<Option<Vec<MoodRecord>>>;
}

/// Returns the trailing `n` records of `history`, oldest first.
pub fn recent_suffix(history: &[MoodRecord], n: usize) -> &[MoodRecord] {
    let start = history.len().saturating_sub(n);
    &history[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(len: usize) -> Vec<MoodRecord> {
        (0..len)
            .map(|i| MoodRecord::new(format!("day{}", i), i as f32, 0.0, 0.0))
            .collect()
    }

    #[test]
    fn test_recent_suffix_shorter_than_history() {
        let all = history(8);
        let recent = recent_suffix(&all, 5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].day, "day3");
        assert_eq!(recent[4].day, "day7");
    }

    #[test]
    fn test_recent_suffix_longer_than_history() {
        let all = history(3);
        assert_eq!(recent_suffix(&all, 5), all.as_slice());
        assert!(recent_suffix(&all, 0).is_empty());
        assert!(recent_suffix(&[], 5).is_empty());
    }
}
