use crate::error::{ChartError, ChartResult};

/// Fraction of each band reserved as padding (half on each side).
const BAND_INNER_PADDING_RATIO: f64 = 0.2;

/// Maps category indices to evenly sized bands across a pixel span.
///
/// Category charts place one band per label; bars occupy the padded interior
/// of their band while line and radar points sit on band centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryBandScale {
    count: usize,
}

impl CategoryBandScale {
    pub fn new(count: usize) -> ChartResult<Self> {
        if count == 0 {
            return Err(ChartError::InvalidData(
                "category scale requires at least one category".to_owned(),
            ));
        }
        Ok(Self { count })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    pub fn band_width(self, span_px: f64) -> ChartResult<f64> {
        validate_span(span_px)?;
        Ok(span_px / self.count as f64)
    }

    /// Pixel offset of the band center for `index`, measured from span start.
    pub fn center(self, index: usize, span_px: f64) -> ChartResult<f64> {
        let width = self.band_width(span_px)?;
        self.check_index(index)?;
        Ok((index as f64 + 0.5) * width)
    }

    /// Padded interior of the band for `index` as `(start, end)` offsets.
    pub fn band_bounds(self, index: usize, span_px: f64) -> ChartResult<(f64, f64)> {
        let width = self.band_width(span_px)?;
        self.check_index(index)?;
        let pad = width * BAND_INNER_PADDING_RATIO * 0.5;
        let start = index as f64 * width;
        Ok((start + pad, start + width - pad))
    }

    fn check_index(self, index: usize) -> ChartResult<()> {
        if index >= self.count {
            return Err(ChartError::InvalidData(format!(
                "category index {index} out of range for {} categories",
                self.count
            )));
        }
        Ok(())
    }
}

fn validate_span(span_px: f64) -> ChartResult<()> {
    if !span_px.is_finite() || span_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "pixel span must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
