//! Terminal renderers for the mood graph.

use colored::Colorize;
use mood_core::graph::{GraphPoint, GraphRenderer, PointLabel};

/// Accumulates the graph as printable text.
///
/// Each `draw` replaces the table; `clear` empties it, the way a drawn graph
/// loses its points and polyline before being redrawn.
#[derive(Debug, Default)]
pub struct TextGraphRenderer {
    lines: Vec<String>,
}

impl TextGraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }
}

impl GraphRenderer for TextGraphRenderer {
    fn clear(&mut self) {
        self.lines.clear();
    }

    fn draw(&mut self, points: &[GraphPoint]) {
        self.lines.clear();
        self.lines
            .push(format!("{:>3}  {:>9}  {:>9}  {}", "#", "x", "y", "caption"));
        for (i, point) in points.iter().enumerate() {
            let caption = match point.label {
                PointLabel::Sad => point.caption().blue(),
                PointLabel::Surprised => point.caption().yellow(),
                PointLabel::Neutral => point.caption().normal(),
            };
            self.lines.push(format!(
                "{:>3}  {:>9.2}  {:>9.2}  {}",
                i + 1,
                point.x,
                point.y,
                caption
            ));
        }
        let path: Vec<String> = points
            .iter()
            .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
            .collect();
        self.lines.push(format!("line: {}", path.join(" -> ")));
    }
}

/// Collects the drawn points for JSON output.
#[derive(Debug, Default)]
pub struct JsonGraphRenderer {
    points: Vec<GraphPoint>,
}

impl JsonGraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.points)
    }
}

impl GraphRenderer for JsonGraphRenderer {
    fn clear(&mut self) {
        self.points.clear();
    }

    fn draw(&mut self, points: &[GraphPoint]) {
        self.points = points.to_vec();
    }
}
