use report_charts::core::Viewport;
use report_charts::render::{Color, build_chart_frame};
use report_charts::spec::{
    ChartKind, ChartSpec, ChartTheme, LegendPosition, ResultSeries, SeriesPaint, SeriesStyle,
    TooltipFormat, ValueAxis,
};

fn bar_spec() -> ChartSpec {
    ChartSpec {
        surface_id: "bars".to_owned(),
        kind: ChartKind::BarVertical,
        title: "T".to_owned(),
        labels: vec!["A".to_owned(), "B".to_owned()],
        series: vec![
            ResultSeries::new("s1", vec![1.0, 2.0]),
            ResultSeries::new("s2", vec![3.0, 4.0]),
        ],
        value_axis: ValueAxis::new(0.0, 10.0),
        category_axis_title: None,
        legend: LegendPosition::Top,
        tooltip: TooltipFormat::Plain,
    }
}

fn line_spec() -> ChartSpec {
    ChartSpec {
        surface_id: "lines".to_owned(),
        kind: ChartKind::Line,
        title: String::new(),
        labels: vec!["P0".to_owned(), "P1".to_owned(), "P2".to_owned()],
        series: vec![
            ResultSeries::new("s1", vec![1.0, 2.0, 3.0])
                .with_stroke_width(2.0)
                .with_point_radius(2.0),
        ],
        value_axis: ValueAxis::new(0.0, 10.0),
        category_axis_title: None,
        legend: LegendPosition::Hidden,
        tooltip: TooltipFormat::Plain,
    }
}

fn radar_spec() -> ChartSpec {
    ChartSpec {
        surface_id: "radar".to_owned(),
        kind: ChartKind::Radar,
        title: String::new(),
        labels: vec![
            "a".to_owned(),
            "b".to_owned(),
            "c".to_owned(),
            "d".to_owned(),
            "e".to_owned(),
        ],
        series: vec![ResultSeries::new("s1", vec![10.0, 20.0, 30.0, 40.0, 50.0])],
        value_axis: ValueAxis::new(0.0, 150.0).with_tick_step(30.0),
        category_axis_title: None,
        legend: LegendPosition::Hidden,
        tooltip: TooltipFormat::Plain,
    }
}

#[test]
fn bar_frame_contains_grid_columns_and_labels() {
    let frame = build_chart_frame(&bar_spec(), Viewport::new(600, 400), &ChartTheme::default())
        .expect("build frame");
    frame.validate().expect("valid frame");

    // Two axis border lines plus one grid line per tick above the axis floor.
    assert_eq!(frame.lines.len(), 7);
    // Two legend swatches plus one column per series per category.
    assert_eq!(frame.rects.len(), 6);
    // Title, two legend entries, six tick labels, two category labels.
    assert_eq!(frame.texts.len(), 11);
    assert!(frame.polygons.is_empty());
    assert!(frame.markers.is_empty());
    assert!(frame.texts.iter().any(|t| t.text == "T"));
}

#[test]
fn line_frame_contains_segments_area_and_markers() {
    let frame = build_chart_frame(&line_spec(), Viewport::new(600, 400), &ChartTheme::default())
        .expect("build frame");
    frame.validate().expect("valid frame");

    // Two axis borders, five grid lines, two polyline segments.
    assert_eq!(frame.lines.len(), 9);
    assert_eq!(frame.polygons.len(), 1);
    assert_eq!(frame.markers.len(), 3);
    // Six tick labels plus three category labels; no title, no legend.
    assert_eq!(frame.texts.len(), 9);
}

#[test]
fn dashed_series_produce_dashed_segments() {
    let mut spec = line_spec();
    spec.series[0] = spec.series[0].clone().with_dash([5.0, 5.0]);
    let frame = build_chart_frame(&spec, Viewport::new(600, 400), &ChartTheme::default())
        .expect("build frame");

    let dashed = frame.lines.iter().filter(|l| !l.dash.is_empty()).count();
    assert_eq!(dashed, 2);
}

#[test]
fn radar_frame_contains_rings_spokes_and_polygon() {
    let frame = build_chart_frame(&radar_spec(), Viewport::new(500, 500), &ChartTheme::default())
        .expect("build frame");
    frame.validate().expect("valid frame");

    // Five grid rings plus the series polygon.
    assert_eq!(frame.polygons.len(), 6);
    // One spoke per category.
    assert_eq!(frame.lines.len(), 5);
    // Five ring tick labels plus five category labels.
    assert_eq!(frame.texts.len(), 10);
}

#[test]
fn per_category_paint_varies_column_fill() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let mut spec = bar_spec();
    spec.legend = LegendPosition::Hidden;
    spec.series = vec![ResultSeries::new("s", vec![3.0, 7.0]).with_style(SeriesStyle {
        fill: SeriesPaint::PerCategory(vec![red, blue]),
        stroke: SeriesPaint::PerCategory(vec![red, blue]),
        ..SeriesStyle::default()
    })];

    let frame = build_chart_frame(&spec, Viewport::new(600, 400), &ChartTheme::default())
        .expect("build frame");
    assert_eq!(frame.rects.len(), 2);
    assert_eq!(frame.rects[0].fill_color, red);
    assert_eq!(frame.rects[1].fill_color, blue);
}

#[test]
fn horizontal_bars_extend_rightward() {
    let mut spec = bar_spec();
    spec.kind = ChartKind::BarHorizontal;
    spec.legend = LegendPosition::Hidden;
    spec.series = vec![ResultSeries::new("s", vec![2.0, 8.0])];

    let frame = build_chart_frame(&spec, Viewport::new(600, 400), &ChartTheme::default())
        .expect("build frame");
    assert_eq!(frame.rects.len(), 2);
    // Both columns share the axis baseline on the left.
    assert_eq!(frame.rects[0].x, frame.rects[1].x);
    assert!(frame.rects[1].width > frame.rects[0].width);
}

#[test]
fn identical_specs_build_identical_frames() {
    let theme = ChartTheme::default();
    let viewport = Viewport::new(640, 420);
    let first = build_chart_frame(&bar_spec(), viewport, &theme).expect("first build");
    let second = build_chart_frame(&bar_spec(), viewport, &theme).expect("second build");
    assert_eq!(first, second);
}

#[test]
fn invalid_viewport_is_rejected() {
    assert!(build_chart_frame(&bar_spec(), Viewport::new(0, 0), &ChartTheme::default()).is_err());
}
