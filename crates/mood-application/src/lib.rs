pub mod graph_service;
pub mod session;

pub use graph_service::MoodGraphService;
pub use session::{SessionAggregator, SessionOutcome};
