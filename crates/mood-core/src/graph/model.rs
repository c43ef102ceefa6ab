//! Graph domain model.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Maximum number of points drawn on the history graph.
pub const MAX_GRAPH_POINTS: usize = 5;

/// Emotion a plotted point is captioned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum PointLabel {
    Sad,
    Surprised,
    Neutral,
}

/// Container geometry used to lay out the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphLayout {
    /// Width of the drawing container.
    pub container_width: f32,
    /// Multiplier applied to each record's y value.
    pub y_spacing: f32,
    /// Empty margin kept on both the left and right edge.
    pub buffer: f32,
}

impl GraphLayout {
    pub const DEFAULT_Y_SPACING: f32 = 50.0;
    pub const DEFAULT_BUFFER: f32 = 10.0;

    /// Creates a layout with the default y spacing and buffer.
    pub fn new(container_width: f32) -> Self {
        Self {
            container_width,
            y_spacing: Self::DEFAULT_Y_SPACING,
            buffer: Self::DEFAULT_BUFFER,
        }
    }

    pub fn with_y_spacing(mut self, y_spacing: f32) -> Self {
        self.y_spacing = y_spacing;
        self
    }

    pub fn with_buffer(mut self, buffer: f32) -> Self {
        self.buffer = buffer;
        self
    }

    /// Width available for points once both buffers are removed, never negative.
    pub fn usable_width(&self) -> f32 {
        (self.container_width - 2.0 * self.buffer).max(0.0)
    }
}

/// A projected point, in container coordinates centered on the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub x: f32,
    pub y: f32,
    pub label: PointLabel,
    /// Highest of the record's three values.
    pub value: f32,
}

impl GraphPoint {
    /// Text shown next to the point, e.g. `"Sad: 0.85"`.
    pub fn caption(&self) -> String {
        format!("{}: {:.2}", self.label, self.value)
    }
}
