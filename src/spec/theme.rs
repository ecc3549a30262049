use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Page-level visual defaults shared by every chart in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub font_family: String,
    pub base_font_size_px: f64,
    pub title_font_size_px: f64,
    pub text_color: Color,
    pub grid_color: Color,
    pub axis_color: Color,
    pub background: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            font_family: "Inter".to_owned(),
            base_font_size_px: 12.0,
            title_font_size_px: 16.0,
            // slate-500, the report body text color
            text_color: Color::from_rgb8(100, 116, 139),
            grid_color: Color::from_rgb8(226, 232, 240),
            axis_color: Color::from_rgb8(148, 163, 184),
            background: Color::rgb(1.0, 1.0, 1.0),
        }
    }
}
