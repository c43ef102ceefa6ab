//! Mood domain module.
//!
//! This module contains the session aggregation primitives, the mood
//! classification rules and the history repository interface.
//!
//! # Module Structure
//!
//! - `model`: `MoodRecord`, `MoodLabel`, `SessionMaxima` and `classify`
//! - `day`: day-of-week labels attached to records
//! - `repository`: `MoodHistoryRepository` trait for persistence
//!
//! # Usage
//!
//! ```
//! use mood_core::mood::{classify, MoodLabel};
//!
//! assert_eq!(classify(0.6, 0.3, 0.1), MoodLabel::Bad);
//! ```

pub mod day;
mod model;
pub mod repository;

pub use model::{MoodLabel, MoodRecord, SAD_SCALE, SessionMaxima, classify, scale_sadness};
pub use repository::{MoodHistoryRepository, RECENT_WINDOW, recent_suffix};
