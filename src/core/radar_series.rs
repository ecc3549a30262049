use serde::{Deserialize, Serialize};

use crate::core::RadialScale;
use crate::error::{ChartError, ChartResult};

/// Projected radar polygon vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarVertex {
    pub category: usize,
    pub x: f64,
    pub y: f64,
}

/// Projects one series onto radar spokes around `(center_x, center_y)`.
///
/// Returns one vertex per value in spoke order; consumers close the polygon by
/// joining the last vertex back to the first.
pub fn project_radar_polygon(
    values: &[f64],
    scale: RadialScale,
    center_x: f64,
    center_y: f64,
    max_radius_px: f64,
) -> ChartResult<Vec<RadarVertex>> {
    if values.len() < 3 {
        return Err(ChartError::InvalidData(
            "radar projection requires at least three categories".to_owned(),
        ));
    }
    if !center_x.is_finite() || !center_y.is_finite() {
        return Err(ChartError::InvalidData(
            "radar center must be finite".to_owned(),
        ));
    }

    let mut vertices = Vec::with_capacity(values.len());
    for (category, value) in values.iter().enumerate() {
        let angle = scale.spoke_angle(category, values.len())?;
        let radius = scale.radius(*value, max_radius_px)?;
        vertices.push(RadarVertex {
            category,
            x: center_x + radius * angle.cos(),
            y: center_y + radius * angle.sin(),
        });
    }

    Ok(vertices)
}
