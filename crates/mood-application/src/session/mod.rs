//! Tracking session module.
//!
//! # Module Structure
//!
//! - `aggregator`: `SessionAggregator`, the timed sampling loop
//! - `ticker`: `Ticker` abstraction with real and logical clocks
//! - `calendar`: day labels for finished sessions

pub mod aggregator;
pub mod calendar;
pub mod ticker;

pub use aggregator::{SessionAggregator, SessionOutcome};
pub use calendar::{Calendar, FixedCalendar, SystemCalendar};
pub use ticker::{FixedStepTicker, IntervalTicker, Ticker};
