//! Day labels for finished sessions.

use chrono::Local;
use mood_core::mood::day::day_label;

/// Supplies the day label a finished session is tagged with.
pub trait Calendar: Send + Sync {
    fn today(&self) -> String;
}

/// Uses the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCalendar;

impl Calendar for SystemCalendar {
    fn today(&self) -> String {
        day_label(&Local::now())
    }
}

/// Always reports the same day.
#[derive(Debug, Clone)]
pub struct FixedCalendar(pub String);

impl FixedCalendar {
    pub fn new(day: impl Into<String>) -> Self {
        Self(day.into())
    }
}

impl Calendar for FixedCalendar {
    fn today(&self) -> String {
        self.0.clone()
    }
}
