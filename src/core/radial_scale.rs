use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::{ChartError, ChartResult};

/// Radial value scale for radar charts.
///
/// Categories map to spoke angles starting at twelve o'clock and proceeding
/// clockwise; values map linearly to radii in `[0, max_radius_px]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialScale {
    max_value: f64,
}

impl RadialScale {
    pub fn new(max_value: f64) -> ChartResult<Self> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(ChartError::InvalidData(
                "radial scale maximum must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { max_value })
    }

    #[must_use]
    pub fn max_value(self) -> f64 {
        self.max_value
    }

    pub fn spoke_angle(self, index: usize, count: usize) -> ChartResult<f64> {
        if count == 0 {
            return Err(ChartError::InvalidData(
                "radial scale requires at least one spoke".to_owned(),
            ));
        }
        if index >= count {
            return Err(ChartError::InvalidData(format!(
                "spoke index {index} out of range for {count} spokes"
            )));
        }
        Ok(-FRAC_PI_2 + (index as f64 / count as f64) * TAU)
    }

    pub fn radius(self, value: f64, max_radius_px: f64) -> ChartResult<f64> {
        if !max_radius_px.is_finite() || max_radius_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "maximum radius must be finite and > 0".to_owned(),
            ));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(
                "radial value must be finite and >= 0".to_owned(),
            ));
        }
        Ok((value / self.max_value).min(1.0) * max_radius_px)
    }
}
