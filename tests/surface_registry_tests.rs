use report_charts::core::Viewport;
use report_charts::render::NullRenderer;
use report_charts::reports::{codeforces_pass_rate_chart, icpc_pass_rate_chart, report_charts};
use report_charts::{RenderOutcome, ReportRenderer, SurfaceRegistry};

#[test]
fn registry_preserves_registration_order() {
    let mut surfaces = SurfaceRegistry::new();
    surfaces
        .insert("second", Viewport::new(800, 400))
        .expect("insert");
    surfaces
        .insert("first", Viewport::new(800, 400))
        .expect("insert");

    let ids: Vec<_> = surfaces.ids().collect();
    assert_eq!(ids, vec!["second", "first"]);
    assert_eq!(surfaces.len(), 2);
    assert!(surfaces.contains("first"));
    assert!(!surfaces.contains("third"));
}

#[test]
fn registry_rejects_invalid_surfaces() {
    let mut surfaces = SurfaceRegistry::new();
    assert!(surfaces.insert("zero", Viewport::new(0, 100)).is_err());
    assert!(surfaces.insert("", Viewport::new(100, 100)).is_err());
    assert!(surfaces.is_empty());
}

#[test]
fn missing_surface_skips_chart_without_error() {
    let mut renderer = ReportRenderer::new(NullRenderer::default());
    let surfaces = SurfaceRegistry::new();

    let outcome = renderer
        .render_chart(&icpc_pass_rate_chart(), &surfaces)
        .expect("skip is not an error");

    assert_eq!(outcome, RenderOutcome::SkippedMissingSurface);
    assert_eq!(renderer.renderer().frames_rendered, 0);
}

#[test]
fn registered_surface_renders_chart() {
    let mut renderer = ReportRenderer::new(NullRenderer::default());
    let mut surfaces = SurfaceRegistry::new();
    surfaces
        .insert("icpcPassRateChart", Viewport::new(900, 500))
        .expect("insert");

    let outcome = renderer
        .render_chart(&icpc_pass_rate_chart(), &surfaces)
        .expect("render");

    assert_eq!(outcome, RenderOutcome::Rendered);
    assert_eq!(renderer.renderer().frames_rendered, 1);
    assert!(renderer.renderer().last_rect_count > 0);
}

#[test]
fn render_all_reports_one_outcome_per_spec() {
    let mut renderer = ReportRenderer::new(NullRenderer::default());
    let mut surfaces = SurfaceRegistry::new();
    surfaces
        .insert("codeforcesPassRateChart", Viewport::new(900, 500))
        .expect("insert");

    let outcomes = renderer
        .render_all(&report_charts(), &surfaces)
        .expect("render all");

    assert_eq!(
        outcomes,
        vec![
            RenderOutcome::SkippedMissingSurface,
            RenderOutcome::Rendered,
            RenderOutcome::SkippedMissingSurface,
            RenderOutcome::SkippedMissingSurface,
        ]
    );
}

#[test]
fn build_frame_returns_none_for_missing_surface() {
    let renderer = ReportRenderer::new(NullRenderer::default());
    let surfaces = SurfaceRegistry::new();
    let frame = renderer
        .build_frame(&codeforces_pass_rate_chart(), &surfaces)
        .expect("no error");
    assert!(frame.is_none());
}
