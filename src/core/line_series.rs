use serde::{Deserialize, Serialize};

use crate::core::{CategoryBandScale, LinearScale, PlotArea};
use crate::error::ChartResult;

/// Projected sample position in pixel coordinates, one per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryPoint {
    pub category: usize,
    pub x: f64,
    pub y: f64,
}

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects one series onto band centers.
pub fn project_category_points(
    values: &[f64],
    bands: CategoryBandScale,
    value_scale: LinearScale,
    plot: PlotArea,
) -> ChartResult<Vec<CategoryPoint>> {
    plot.validate()?;
    let mut points = Vec::with_capacity(values.len());
    for (category, value) in values.iter().enumerate() {
        let x = plot.x + bands.center(category, plot.width)?;
        let y = plot.bottom() - value_scale.domain_to_pixel(*value, plot.height)?;
        points.push(CategoryPoint { category, x, y });
    }
    Ok(points)
}

/// Connects adjacent projected points into segments.
///
/// Fewer than two points yields no segments; a line over `n` categories always
/// yields `n - 1` segments.
#[must_use]
pub fn connect_category_points(points: &[CategoryPoint]) -> Vec<LineSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(points.len() - 1);
    for pair in points.windows(2) {
        segments.push(LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        });
    }
    segments
}
