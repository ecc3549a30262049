use serde::{Deserialize, Serialize};

use crate::core::{CategoryBandScale, LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};

/// Gap between sibling columns inside one category band, as a fraction of the
/// per-series slot width.
const COLUMN_SLOT_GAP_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarOrientation {
    Vertical,
    Horizontal,
}

/// One projected column in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarColumn {
    pub series: usize,
    pub category: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects grouped columns for one or more series over shared category bands.
///
/// Columns grow from the value-domain start (the axis baseline) toward each
/// sample. The projection is deterministic and side-effect free so rendering
/// and tests consume identical geometry.
pub fn project_bar_columns(
    series_values: &[&[f64]],
    bands: CategoryBandScale,
    value_scale: LinearScale,
    plot: PlotArea,
    orientation: BarOrientation,
) -> ChartResult<Vec<BarColumn>> {
    plot.validate()?;
    if series_values.is_empty() {
        return Ok(Vec::new());
    }
    for values in series_values {
        if values.len() != bands.count() {
            return Err(ChartError::InvalidData(format!(
                "bar series has {} values for {} categories",
                values.len(),
                bands.count()
            )));
        }
    }

    let band_span = match orientation {
        BarOrientation::Vertical => plot.width,
        BarOrientation::Horizontal => plot.height,
    };
    let value_span = match orientation {
        BarOrientation::Vertical => plot.height,
        BarOrientation::Horizontal => plot.width,
    };

    let slots = series_values.len() as f64;
    let mut columns = Vec::with_capacity(series_values.len() * bands.count());

    for category in 0..bands.count() {
        let (band_start, band_end) = bands.band_bounds(category, band_span)?;
        let slot_width = (band_end - band_start) / slots;
        let gap = slot_width * COLUMN_SLOT_GAP_RATIO * 0.5;

        for (series, values) in series_values.iter().enumerate() {
            let value_offset = value_scale.domain_to_pixel(values[category], value_span)?;
            let slot_start = band_start + series as f64 * slot_width + gap;
            let thickness = slot_width - 2.0 * gap;

            let column = match orientation {
                BarOrientation::Vertical => {
                    let baseline = plot.bottom();
                    let tip = baseline - value_offset;
                    BarColumn {
                        series,
                        category,
                        x: plot.x + slot_start,
                        y: tip.min(baseline),
                        width: thickness,
                        height: value_offset.abs(),
                    }
                }
                BarOrientation::Horizontal => {
                    let baseline = plot.x;
                    let tip = baseline + value_offset;
                    BarColumn {
                        series,
                        category,
                        x: tip.min(baseline),
                        y: plot.y + slot_start,
                        width: value_offset.abs(),
                        height: thickness,
                    }
                }
            };
            columns.push(column);
        }
    }

    Ok(columns)
}
