//! Mood history graph use case.
//!
//! Loads the most recent records, projects them and hands the points to a
//! renderer, clearing whatever the renderer showed before.

use std::sync::Arc;

use mood_core::error::Result;
use mood_core::graph::{GraphLayout, GraphPoint, GraphRenderer, project};
use mood_core::mood::{MoodHistoryRepository, RECENT_WINDOW};

pub struct MoodGraphService {
    repository: Arc<dyn MoodHistoryRepository>,
    layout: GraphLayout,
}

impl MoodGraphService {
    pub fn new(repository: Arc<dyn MoodHistoryRepository>, layout: GraphLayout) -> Self {
        Self { repository, layout }
    }

    /// Projects the most recent records.
    ///
    /// Returns `Ok(None)` when no history has been stored yet.
    pub async fn points(&self) -> Result<Option<Vec<GraphPoint>>> {
        let Some(records) = self.repository.load_recent(RECENT_WINDOW).await? else {
            tracing::warn!("No mood data found");
            return Ok(None);
        };

        let points = project(&records, &self.layout);
        for (i, point) in points.iter().enumerate() {
            tracing::debug!(
                point = i + 1,
                day = %records[i].day,
                x = point.x,
                y = point.y,
                "Projected graph point"
            );
        }
        Ok(Some(points))
    }

    /// Redraws the graph on `renderer`.
    ///
    /// With no stored history the renderer is left untouched and `false` is
    /// returned. Otherwise the previous graph is cleared and, if there is at
    /// least one point, the new one drawn.
    pub async fn generate(&self, renderer: &mut dyn GraphRenderer) -> Result<bool> {
        let Some(points) = self.points().await? else {
            return Ok(false);
        };

        renderer.clear();
        if !points.is_empty() {
            renderer.draw(&points);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mood_core::graph::PointLabel;
    use mood_core::mood::MoodRecord;

    struct FixedRepository(Option<Vec<MoodRecord>>);

    #[async_trait]
    impl MoodHistoryRepository for FixedRepository {
        async fn append(&self, _record: &MoodRecord) -> Result<()> {
            Ok(())
        }

        async fn load_recent(&self, n: usize) -> Result<Option<Vec<MoodRecord>>> {
            Ok(self.0.as_ref().map(|all| {
                let start = all.len().saturating_sub(n);
                all[start..].to_vec()
            }))
        }

        async fn load_all(&self) -> Result<Option<Vec<MoodRecord>>> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        clears: usize,
        drawn: Vec<Vec<GraphPoint>>,
    }

    impl GraphRenderer for RecordingRenderer {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn draw(&mut self, points: &[GraphPoint]) {
            self.drawn.push(points.to_vec());
        }
    }

    fn service(history: Option<Vec<MoodRecord>>) -> MoodGraphService {
        MoodGraphService::new(Arc::new(FixedRepository(history)), GraphLayout::new(120.0))
    }

    #[tokio::test]
    async fn test_no_data_leaves_renderer_untouched() {
        let mut renderer = RecordingRenderer::default();
        assert!(!service(None).generate(&mut renderer).await.unwrap());
        assert_eq!(renderer.clears, 0);
        assert!(renderer.drawn.is_empty());
    }

    #[tokio::test]
    async fn test_empty_history_clears_without_drawing() {
        let mut renderer = RecordingRenderer::default();
        assert!(service(Some(Vec::new())).generate(&mut renderer).await.unwrap());
        assert_eq!(renderer.clears, 1);
        assert!(renderer.drawn.is_empty());
    }

    #[tokio::test]
    async fn test_draws_most_recent_five() {
        let history: Vec<MoodRecord> = (0..8)
            .map(|i| MoodRecord::new(format!("d{}", i), 0.0, 0.0, i as f32 / 10.0))
            .collect();
        let mut renderer = RecordingRenderer::default();

        service(Some(history)).generate(&mut renderer).await.unwrap();

        assert_eq!(renderer.drawn.len(), 1);
        let points = &renderer.drawn[0];
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].x, -50.0);
        assert_eq!(points[4].x, 50.0);
        assert!((points[0].value - 0.3).abs() < 1e-6);
        assert!((points[4].value - 0.7).abs() < 1e-6);
        assert!(points.iter().all(|p| p.label == PointLabel::Neutral));
    }

    #[tokio::test]
    async fn test_regenerate_clears_previous_graph() {
        let mut renderer = RecordingRenderer::default();
        let service = service(Some(vec![MoodRecord::new("Monday", 1.2, 0.1, 0.1)]));

        service.generate(&mut renderer).await.unwrap();
        service.generate(&mut renderer).await.unwrap();

        assert_eq!(renderer.clears, 2);
        assert_eq!(renderer.drawn.len(), 2);
        assert_eq!(renderer.drawn[1][0].x, 0.0);
        assert_eq!(renderer.drawn[1][0].y, -1.2 * GraphLayout::DEFAULT_Y_SPACING);
    }
}
