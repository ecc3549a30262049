mod frame;
mod frame_builder;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use frame_builder::build_chart_frame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, DashPattern, LinePrimitive, MarkerPrimitive, PolygonPrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart configuration logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
