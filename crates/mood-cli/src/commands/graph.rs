use anyhow::Result;
use mood_application::MoodGraphService;
use mood_core::graph::GraphLayout;

use super::Context;
use crate::renderer::{JsonGraphRenderer, TextGraphRenderer};

/// Command-line adjustments to the configured graph layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutOverrides {
    pub width: Option<f32>,
    pub y_spacing: Option<f32>,
    pub buffer: Option<f32>,
}

impl LayoutOverrides {
    pub fn apply(self, base: GraphLayout) -> GraphLayout {
        GraphLayout {
            container_width: self.width.unwrap_or(base.container_width),
            y_spacing: self.y_spacing.unwrap_or(base.y_spacing),
            buffer: self.buffer.unwrap_or(base.buffer),
        }
    }
}

pub async fn run(context: &Context, overrides: LayoutOverrides, json: bool) -> Result<()> {
    let layout = overrides.apply(GraphLayout::from(&context.config.graph));
    let service = MoodGraphService::new(context.repository(), layout);

    if json {
        let mut renderer = JsonGraphRenderer::new();
        if service.generate(&mut renderer).await? {
            println!("{}", renderer.to_json()?);
        } else {
            println!("null");
        }
        return Ok(());
    }

    let mut renderer = TextGraphRenderer::new();
    if !service.generate(&mut renderer).await? {
        println!("No mood data found.");
    } else if renderer.lines().is_empty() {
        println!("No mood records yet.");
    } else {
        renderer.print();
    }
    Ok(())
}
