//! Projection of mood records onto the history graph.
//!
//! Points are spread evenly across the usable width and centered on `x = 0`.
//! Strong sadness plots below the axis, strong surprise above it, and
//! everything else sits on the axis.

use super::model::{GraphLayout, GraphPoint, MAX_GRAPH_POINTS, PointLabel};
use crate::mood::MoodRecord;

/// A value above this dominates the y position regardless of the others.
const STRONG_THRESHOLD: f32 = 0.8;
/// The highest value must exceed this to leave the axis.
const VISIBLE_THRESHOLD: f32 = 0.6;

/// Projects up to [`MAX_GRAPH_POINTS`] records into graph points.
///
/// The first `min(len, 5)` records are plotted in input order, oldest leftmost.
/// An empty slice yields no points.
pub fn project(records: &[MoodRecord], layout: &GraphLayout) -> Vec<GraphPoint> {
    let count = records.len().min(MAX_GRAPH_POINTS);
    if count == 0 {
        return Vec::new();
    }

    let (start_x, dx) = if count == 1 {
        (0.0, 0.0)
    } else {
        let dx = layout.usable_width() / (count - 1) as f32;
        (-((count - 1) as f32 * dx) / 2.0, dx)
    };

    records[..count]
        .iter()
        .enumerate()
        .map(|(i, record)| GraphPoint {
            x: start_x + i as f32 * dx,
            y: y_value(record) * layout.y_spacing,
            label: point_label(record),
            value: highest_value(record),
        })
        .collect()
}

/// Signed height of a record before y spacing is applied.
///
/// Sadness is plotted negative, surprise positive, and anything not strong
/// enough to matter is `0`.
pub fn y_value(record: &MoodRecord) -> f32 {
    let sad = record.sad_value;
    let surprised = record.surprised_value;

    if sad > STRONG_THRESHOLD {
        return -sad;
    }
    if surprised > STRONG_THRESHOLD {
        return surprised;
    }

    let highest = highest_value(record);
    if sad == highest && highest > VISIBLE_THRESHOLD {
        -sad
    } else if surprised == highest && highest > VISIBLE_THRESHOLD {
        surprised
    } else {
        0.0
    }
}

/// The emotion with the strictly greatest value, defaulting to neutral.
pub fn point_label(record: &MoodRecord) -> PointLabel {
    let sad = record.sad_value;
    let surprised = record.surprised_value;
    let neutral = record.neutral_value;

    if sad > surprised && sad > neutral {
        PointLabel::Sad
    } else if surprised > sad && surprised > neutral {
        PointLabel::Surprised
    } else {
        PointLabel::Neutral
    }
}

fn highest_value(record: &MoodRecord) -> f32 {
    record
        .sad_value
        .max(record.surprised_value)
        .max(record.neutral_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sad: f32, surprised: f32, neutral: f32) -> MoodRecord {
        MoodRecord::new("Monday", sad, surprised, neutral)
    }

    #[test]
    fn test_y_value_reference_cases() {
        assert_eq!(y_value(&record(0.85, 0.1, 0.1)), -0.85);
        assert_eq!(y_value(&record(0.7, 0.75, 0.1)), 0.75);
        assert_eq!(y_value(&record(0.4, 0.3, 0.5)), 0.0);
    }

    #[test]
    fn test_y_value_strong_sadness_beats_strong_surprise() {
        assert_eq!(y_value(&record(0.81, 0.95, 0.0)), -0.81);
        assert_eq!(y_value(&record(0.8, 0.95, 0.0)), 0.95);
    }

    #[test]
    fn test_y_value_neutral_highest_stays_on_axis() {
        assert_eq!(y_value(&record(0.7, 0.65, 0.75)), 0.0);
        // equal to threshold is not above it
        assert_eq!(y_value(&record(0.6, 0.1, 0.1)), 0.0);
    }

    #[test]
    fn test_point_label_ties_default_to_neutral() {
        assert_eq!(point_label(&record(0.9, 0.1, 0.1)), PointLabel::Sad);
        assert_eq!(point_label(&record(0.1, 0.9, 0.1)), PointLabel::Surprised);
        assert_eq!(point_label(&record(0.1, 0.1, 0.9)), PointLabel::Neutral);
        assert_eq!(point_label(&record(0.5, 0.5, 0.1)), PointLabel::Neutral);
        assert_eq!(point_label(&record(0.5, 0.1, 0.5)), PointLabel::Neutral);
    }

    #[test]
    fn test_project_empty_yields_no_points() {
        assert!(project(&[], &GraphLayout::new(400.0)).is_empty());
    }

    #[test]
    fn test_project_single_point_at_origin() {
        let points = project(&[record(0.9, 0.0, 0.0)], &GraphLayout::new(400.0));
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[0].y, -0.9 * GraphLayout::DEFAULT_Y_SPACING);
        assert_eq!(points[0].label, PointLabel::Sad);
        assert_eq!(points[0].value, 0.9);
    }

    #[test]
    fn test_project_five_points_symmetric() {
        let records: Vec<_> = (0..5).map(|i| record(0.1 * i as f32, 0.2, 0.3)).collect();
        let layout = GraphLayout::new(420.0);
        let points = project(&records, &layout);

        assert_eq!(points.len(), 5);
        assert_eq!(points[0].x, -200.0);
        assert_eq!(points[4].x, 200.0);
        assert_eq!(points[2].x, 0.0);
        for i in 0..5 {
            assert!((points[i].x + points[4 - i].x).abs() < 1e-4);
        }
        for pair in points.windows(2) {
            assert!((pair[1].x - pair[0].x - 100.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_project_caps_at_five_in_input_order() {
        let records: Vec<_> = (0..7)
            .map(|i| MoodRecord::new(format!("d{}", i), 0.0, 0.1 * i as f32, 0.05))
            .collect();
        let points = project(&records, &GraphLayout::new(100.0));
        assert_eq!(points.len(), 5);
        let expected = [0.05, 0.1, 0.2, 0.3, 0.4];
        for (point, want) in points.iter().zip(expected) {
            assert!((point.value - want).abs() < 1e-6);
        }
    }

    #[test]
    fn test_project_degenerate_width_collapses_to_center() {
        let records = vec![record(0.1, 0.0, 0.0); 3];
        let layout = GraphLayout::new(15.0);
        let points = project(&records, &layout);
        assert_eq!(points.len(), 3);
        for point in &points {
            assert_eq!(point.x, 0.0);
        }
    }

    #[test]
    fn test_project_applies_y_spacing() {
        let layout = GraphLayout::new(200.0).with_y_spacing(10.0);
        let points = project(&[record(0.1, 0.9, 0.0), record(0.2, 0.1, 0.7)], &layout);
        assert!((points[0].y - 9.0).abs() < 1e-5);
        assert_eq!(points[1].y, 0.0);
        assert_eq!(points[0].x, -90.0);
        assert_eq!(points[1].x, 90.0);
    }
}
