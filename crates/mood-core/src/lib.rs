pub mod config;
pub mod emotion;
pub mod error;
pub mod graph;
pub mod mood;
pub mod trigger;

// Re-export common error type
pub use error::MoodError;
