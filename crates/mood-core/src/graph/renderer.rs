//! Render interface for the history graph.

use super::model::GraphPoint;

/// A surface that displays projected graph points joined by a polyline.
pub trait GraphRenderer {
    /// Removes previously drawn points and resets the line to zero points.
    fn clear(&mut self);

    /// Draws `points` and connects them in order with straight segments.
    fn draw(&mut self, points: &[GraphPoint]);
}
