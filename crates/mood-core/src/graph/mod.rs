//! History graph module.
//!
//! # Module Structure
//!
//! - `model`: `GraphLayout`, `GraphPoint` and `PointLabel`
//! - `projector`: pure projection of records into points
//! - `renderer`: the `GraphRenderer` surface points are handed to

mod model;
pub mod projector;
pub mod renderer;

pub use model::{GraphLayout, GraphPoint, MAX_GRAPH_POINTS, PointLabel};
pub use projector::{point_label, project, y_value};
pub use renderer::GraphRenderer;
