//! Emotion domain module.
//!
//! # Module Structure
//!
//! - `model`: `Emotion` categories and per-tick `EmotionSample`s
//! - `source`: the `EmotionSource` capability consumed by the aggregator

mod model;
pub mod source;

pub use model::{Emotion, EmotionSample};
pub use source::EmotionSource;
