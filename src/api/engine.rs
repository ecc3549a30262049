use tracing::debug;

use crate::api::SurfaceRegistry;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, build_chart_frame};
use crate::spec::{ChartSpec, ChartTheme};

/// Result of one render attempt for one chart spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    /// The spec's surface id is not registered; the chart is skipped without
    /// an error so pages carrying only a subset of charts stay quiet.
    SkippedMissingSurface,
}

/// Renders report charts against registered display surfaces.
pub struct ReportRenderer<R: Renderer> {
    renderer: R,
    theme: ChartTheme,
}

impl<R: Renderer> ReportRenderer<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            theme: ChartTheme::default(),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    /// Renders one chart onto its target surface.
    ///
    /// A missing surface is the only tolerated miss; every other problem
    /// (invalid spec, invalid geometry, backend failure) propagates.
    pub fn render_chart(
        &mut self,
        spec: &ChartSpec,
        surfaces: &SurfaceRegistry,
    ) -> ChartResult<RenderOutcome> {
        let Some(viewport) = surfaces.get(&spec.surface_id) else {
            debug!(surface_id = %spec.surface_id, title = %spec.title, "surface absent, skipping chart");
            return Ok(RenderOutcome::SkippedMissingSurface);
        };

        let frame = build_chart_frame(spec, viewport, &self.theme)?;
        self.renderer.render(&frame)?;
        debug!(
            surface_id = %spec.surface_id,
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            polygons = frame.polygons.len(),
            texts = frame.texts.len(),
            "chart rendered"
        );
        Ok(RenderOutcome::Rendered)
    }

    /// Renders every spec in order, returning one outcome per spec.
    pub fn render_all(
        &mut self,
        specs: &[ChartSpec],
        surfaces: &SurfaceRegistry,
    ) -> ChartResult<Vec<RenderOutcome>> {
        let mut outcomes = Vec::with_capacity(specs.len());
        for spec in specs {
            outcomes.push(self.render_chart(spec, surfaces)?);
        }
        Ok(outcomes)
    }

    /// Builds the frame for one spec without touching the backend, for callers
    /// that want the primitives themselves.
    pub fn build_frame(
        &self,
        spec: &ChartSpec,
        surfaces: &SurfaceRegistry,
    ) -> ChartResult<Option<RenderFrame>> {
        let Some(viewport) = surfaces.get(&spec.surface_id) else {
            return Ok(None);
        };
        build_chart_frame(spec, viewport, &self.theme).map(Some)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
