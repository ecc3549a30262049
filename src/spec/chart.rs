use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::spec::format::{TickFormat, TooltipFormat};
use crate::spec::series::ResultSeries;

/// Default tick count when a chart does not pin an explicit step.
const DEFAULT_TICK_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    BarVertical,
    BarHorizontal,
    Line,
    Radar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    Top,
    Hidden,
}

/// Value-axis bounds and tick labeling for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub title: Option<String>,
    pub min: f64,
    pub max: f64,
    pub tick_step: Option<f64>,
    pub tick_format: TickFormat,
}

impl ValueAxis {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            title: None,
            min,
            max,
            tick_step: None,
            tick_format: TickFormat::Plain,
        }
    }

    /// Zero-based axis reaching the largest sample, the `beginAtZero` shape
    /// most report charts use when no explicit maximum is pinned.
    pub fn zero_through_max(values: impl IntoIterator<Item = f64>) -> ChartResult<Self> {
        let max = values
            .into_iter()
            .map(OrderedFloat)
            .max()
            .map(OrderedFloat::into_inner)
            .ok_or_else(|| {
                ChartError::InvalidData("axis bounds require at least one sample".to_owned())
            })?;
        if !max.is_finite() || max <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis maximum must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self::new(0.0, max))
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_tick_step(mut self, tick_step: f64) -> Self {
        self.tick_step = Some(tick_step);
        self
    }

    #[must_use]
    pub fn with_tick_format(mut self, tick_format: TickFormat) -> Self {
        self.tick_format = tick_format;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(ChartError::InvalidData(
                "value axis requires finite min < max".to_owned(),
            ));
        }
        if let Some(step) = self.tick_step {
            if !step.is_finite() || step <= 0.0 {
                return Err(ChartError::InvalidData(
                    "axis tick step must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Tick positions from `min` to `max` inclusive at the configured step.
    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        let step = self
            .tick_step
            .unwrap_or((self.max - self.min) / DEFAULT_TICK_COUNT as f64);
        let count = ((self.max - self.min) / step + 1e-9).floor() as usize;
        (0..=count).map(|i| self.min + i as f64 * step).collect()
    }
}

/// Full declarative description of one rendered chart.
///
/// Specs are constructed once at load time and never mutated; everything a
/// draw pass needs is resolved from the spec plus the surface viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Identifier of the display surface this chart targets.
    pub surface_id: String,
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<ResultSeries>,
    pub value_axis: ValueAxis,
    pub category_axis_title: Option<String>,
    pub legend: LegendPosition,
    pub tooltip: TooltipFormat,
}

impl ChartSpec {
    /// Checks the structural invariants every renderable spec must satisfy.
    ///
    /// The central one: every series carries exactly one value per category
    /// label, and per-category palettes line up the same way.
    pub fn validate(&self) -> ChartResult<()> {
        if self.surface_id.is_empty() {
            return Err(ChartError::InvalidData(
                "chart spec requires a surface id".to_owned(),
            ));
        }
        if self.labels.is_empty() {
            return Err(ChartError::InvalidData(
                "chart spec requires at least one category label".to_owned(),
            ));
        }
        if self.series.is_empty() {
            return Err(ChartError::InvalidData(
                "chart spec requires at least one series".to_owned(),
            ));
        }
        self.value_axis.validate()?;

        if self.kind == ChartKind::Radar {
            if self.labels.len() < 3 {
                return Err(ChartError::InvalidData(
                    "radar charts require at least three category labels".to_owned(),
                ));
            }
            if self.value_axis.min != 0.0 {
                return Err(ChartError::InvalidData(
                    "radar charts require a zero-based value axis".to_owned(),
                ));
            }
        }

        for series in &self.series {
            if series.values.len() != self.labels.len() {
                return Err(ChartError::SeriesLengthMismatch {
                    series: series.label.clone(),
                    expected: self.labels.len(),
                    actual: series.values.len(),
                });
            }
            for value in &series.values {
                if !value.is_finite() {
                    return Err(ChartError::InvalidData(format!(
                        "series `{}` contains a non-finite value",
                        series.label
                    )));
                }
            }
            for paint in [&series.style.stroke, &series.style.fill] {
                if let Some(len) = paint.per_category_len() {
                    if len != self.labels.len() {
                        return Err(ChartError::SeriesLengthMismatch {
                            series: series.label.clone(),
                            expected: self.labels.len(),
                            actual: len,
                        });
                    }
                }
            }
            if !series.style.stroke_width.is_finite() || series.style.stroke_width < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` has an invalid stroke width",
                    series.label
                )));
            }
            if !series.style.point_radius.is_finite() || series.style.point_radius < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` has an invalid point radius",
                    series.label
                )));
            }
        }

        Ok(())
    }

    /// Tooltip line for the sample at `(series, category)`, or `None` when the
    /// indices fall outside the spec.
    #[must_use]
    pub fn tooltip_label(&self, series: usize, category: usize) -> Option<String> {
        let series = self.series.get(series)?;
        let category_label = self.labels.get(category)?;
        let value = series.values.get(category)?;
        Some(
            self.tooltip
                .tooltip_label(&series.label, category_label, *value),
        )
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart spec: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart spec json: {e}")))
    }
}
