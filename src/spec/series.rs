use serde::{Deserialize, Serialize};

use crate::render::{Color, DashPattern};

/// Paint for one visual aspect of a series.
///
/// Most series use one color; comparison bars paint each category separately
/// to call out individual entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeriesPaint {
    Uniform(Color),
    PerCategory(Vec<Color>),
}

impl SeriesPaint {
    /// Resolves the paint for `category`, falling back to the last entry when a
    /// per-category palette is shorter than the category index.
    #[must_use]
    pub fn color_for(&self, category: usize) -> Color {
        match self {
            Self::Uniform(color) => *color,
            Self::PerCategory(colors) => colors
                .get(category)
                .or_else(|| colors.last())
                .copied()
                .unwrap_or(Color::rgb(0.0, 0.0, 0.0)),
        }
    }

    #[must_use]
    pub fn per_category_len(&self) -> Option<usize> {
        match self {
            Self::Uniform(_) => None,
            Self::PerCategory(colors) => Some(colors.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub stroke: SeriesPaint,
    pub fill: SeriesPaint,
    pub stroke_width: f64,
    /// Dash pattern for line strokes; empty means solid.
    pub dash: DashPattern,
    /// Point marker radius for line and radar series; 0 disables markers.
    pub point_radius: f64,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            stroke: SeriesPaint::Uniform(Color::rgb(0.3, 0.3, 0.3)),
            fill: SeriesPaint::Uniform(Color::rgba(0.3, 0.3, 0.3, 0.4)),
            stroke_width: 2.0,
            dash: DashPattern::new(),
            point_radius: 0.0,
        }
    }
}

/// One named, immutable sequence of benchmark values, one per category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

impl ResultSeries {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
            style: SeriesStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, stroke: Color, fill: Color) -> Self {
        self.style.stroke = SeriesPaint::Uniform(stroke);
        self.style.fill = SeriesPaint::Uniform(fill);
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.style.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: impl IntoIterator<Item = f64>) -> Self {
        self.style.dash = dash.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, point_radius: f64) -> Self {
        self.style.point_radius = point_radius;
        self
    }
}
