use crate::core::{
    BarOrientation, CategoryBandScale, LinearScale, PlotArea, RadialScale, Viewport,
    connect_category_points, project_bar_columns, project_category_points, project_radar_polygon,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, MarkerPrimitive, PolygonPrimitive, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};
use crate::spec::{ChartKind, ChartSpec, ChartTheme, LegendPosition};

const OUTER_PADDING_PX: f64 = 16.0;
const TITLE_GAP_PX: f64 = 10.0;
const LEGEND_SWATCH_SIZE_PX: f64 = 10.0;
const LEGEND_ITEM_GAP_PX: f64 = 14.0;
const LEGEND_ROW_HEIGHT_PX: f64 = 20.0;
const TICK_LABEL_GAP_PX: f64 = 6.0;
const AXIS_TITLE_ROW_PX: f64 = 18.0;
const RADAR_LABEL_MARGIN_PX: f64 = 26.0;
const GRID_STROKE_PX: f64 = 1.0;
const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

/// Materializes one chart spec into backend-agnostic primitives.
///
/// The build is a pure function of `(spec, viewport, theme)`: equal inputs
/// produce equal frames, which is what the snapshot and determinism tests
/// lean on.
pub fn build_chart_frame(
    spec: &ChartSpec,
    viewport: Viewport,
    theme: &ChartTheme,
) -> ChartResult<RenderFrame> {
    spec.validate()?;
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let mut frame = RenderFrame::new(viewport);
    let width = f64::from(viewport.width);
    let mut top = OUTER_PADDING_PX;

    if !spec.title.is_empty() {
        top += theme.title_font_size_px;
        frame = frame.with_text(TextPrimitive::new(
            spec.title.clone(),
            width * 0.5,
            top,
            theme.title_font_size_px,
            theme.text_color,
            TextHAlign::Center,
        ));
        top += TITLE_GAP_PX;
    }

    if spec.legend == LegendPosition::Top {
        frame = push_legend_row(frame, spec, theme, top);
        top += LEGEND_ROW_HEIGHT_PX;
    }

    match spec.kind {
        ChartKind::Radar => build_radar(frame, spec, theme, viewport, top),
        kind => build_cartesian(frame, spec, theme, viewport, top, kind),
    }
}

fn push_legend_row(
    mut frame: RenderFrame,
    spec: &ChartSpec,
    theme: &ChartTheme,
    top: f64,
) -> RenderFrame {
    let mut cursor = OUTER_PADDING_PX * 2.0;
    let baseline = top + LEGEND_SWATCH_SIZE_PX;
    for series in &spec.series {
        frame = frame.with_rect(RectPrimitive::filled(
            cursor,
            baseline - LEGEND_SWATCH_SIZE_PX,
            LEGEND_SWATCH_SIZE_PX,
            LEGEND_SWATCH_SIZE_PX,
            series.style.stroke.color_for(0),
        ));
        cursor += LEGEND_SWATCH_SIZE_PX + 5.0;
        frame = frame.with_text(TextPrimitive::new(
            series.label.clone(),
            cursor,
            baseline,
            theme.base_font_size_px,
            theme.text_color,
            TextHAlign::Left,
        ));
        cursor += estimate_text_width(&series.label, theme.base_font_size_px) + LEGEND_ITEM_GAP_PX;
    }
    frame
}

fn build_cartesian(
    mut frame: RenderFrame,
    spec: &ChartSpec,
    theme: &ChartTheme,
    viewport: Viewport,
    top: f64,
    kind: ChartKind,
) -> ChartResult<RenderFrame> {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let axis = &spec.value_axis;
    let scale = LinearScale::new(axis.min, axis.max)?;
    let bands = CategoryBandScale::new(spec.labels.len())?;
    let ticks = axis.tick_values();

    // Left gutter holds value tick labels for vertical kinds and category
    // labels for horizontal bars.
    let left_gutter = match kind {
        ChartKind::BarHorizontal => {
            longest_width(spec.labels.iter(), theme.base_font_size_px) + TICK_LABEL_GAP_PX * 2.0
        }
        _ => {
            let tick_texts: Vec<String> =
                ticks.iter().map(|v| axis.tick_format.tick_label(*v)).collect();
            longest_width(tick_texts.iter(), theme.base_font_size_px) + TICK_LABEL_GAP_PX * 2.0
        }
    };
    let value_title_row = if axis.title.is_some() { AXIS_TITLE_ROW_PX } else { 0.0 };
    let category_title_row = if spec.category_axis_title.is_some() {
        AXIS_TITLE_ROW_PX
    } else {
        0.0
    };
    let bottom_gutter = theme.base_font_size_px + TICK_LABEL_GAP_PX * 2.0
        + match kind {
            ChartKind::BarHorizontal => value_title_row,
            _ => category_title_row,
        };

    let plot = PlotArea::new(
        OUTER_PADDING_PX + left_gutter,
        top + value_title_row_above(kind, value_title_row),
        width - OUTER_PADDING_PX * 2.0 - left_gutter,
        height - top - value_title_row_above(kind, value_title_row) - OUTER_PADDING_PX
            - bottom_gutter,
    );
    plot.validate()?;

    // Axis border.
    frame = frame
        .with_line(LinePrimitive::new(
            plot.x,
            plot.y,
            plot.x,
            plot.bottom(),
            GRID_STROKE_PX,
            theme.axis_color,
        ))
        .with_line(LinePrimitive::new(
            plot.x,
            plot.bottom(),
            plot.right(),
            plot.bottom(),
            GRID_STROKE_PX,
            theme.axis_color,
        ));

    // Grid lines plus tick labels along the value axis.
    for tick in &ticks {
        let text = axis.tick_format.tick_label(*tick);
        match kind {
            ChartKind::BarHorizontal => {
                let x = plot.x + scale.domain_to_pixel(*tick, plot.width)?;
                if *tick > axis.min {
                    frame = frame.with_line(
                        LinePrimitive::new(x, plot.y, x, plot.bottom(), GRID_STROKE_PX, theme.grid_color),
                    );
                }
                frame = frame.with_text(TextPrimitive::new(
                    text,
                    x,
                    plot.bottom() + theme.base_font_size_px + TICK_LABEL_GAP_PX,
                    theme.base_font_size_px,
                    theme.text_color,
                    TextHAlign::Center,
                ));
            }
            _ => {
                let y = plot.bottom() - scale.domain_to_pixel(*tick, plot.height)?;
                if *tick > axis.min {
                    frame = frame.with_line(
                        LinePrimitive::new(plot.x, y, plot.right(), y, GRID_STROKE_PX, theme.grid_color),
                    );
                }
                frame = frame.with_text(TextPrimitive::new(
                    text,
                    plot.x - TICK_LABEL_GAP_PX,
                    y + theme.base_font_size_px * 0.35,
                    theme.base_font_size_px,
                    theme.text_color,
                    TextHAlign::Right,
                ));
            }
        }
    }

    // Category labels on the remaining axis.
    for (index, label) in spec.labels.iter().enumerate() {
        match kind {
            ChartKind::BarHorizontal => {
                let y = plot.y + bands.center(index, plot.height)?;
                frame = frame.with_text(TextPrimitive::new(
                    label.clone(),
                    plot.x - TICK_LABEL_GAP_PX,
                    y + theme.base_font_size_px * 0.35,
                    theme.base_font_size_px,
                    theme.text_color,
                    TextHAlign::Right,
                ));
            }
            _ => {
                let x = plot.x + bands.center(index, plot.width)?;
                frame = frame.with_text(TextPrimitive::new(
                    label.clone(),
                    x,
                    plot.bottom() + theme.base_font_size_px + TICK_LABEL_GAP_PX,
                    theme.base_font_size_px,
                    theme.text_color,
                    TextHAlign::Center,
                ));
            }
        }
    }

    // Axis titles.
    if let Some(title) = &axis.title {
        match kind {
            ChartKind::BarHorizontal => {
                frame = frame.with_text(TextPrimitive::new(
                    title.clone(),
                    plot.x + plot.width * 0.5,
                    f64::from(viewport.height) - OUTER_PADDING_PX * 0.5,
                    theme.base_font_size_px,
                    theme.text_color,
                    TextHAlign::Center,
                ));
            }
            _ => {
                frame = frame.with_text(TextPrimitive::new(
                    title.clone(),
                    plot.x,
                    plot.y - TICK_LABEL_GAP_PX,
                    theme.base_font_size_px,
                    theme.text_color,
                    TextHAlign::Left,
                ));
            }
        }
    }
    if let Some(title) = &spec.category_axis_title {
        match kind {
            ChartKind::BarHorizontal => {
                // Horizontal bars label categories on the left edge; a long
                // axis title there would collide with the labels, so it shares
                // the top-left anchor instead.
                frame = frame.with_text(TextPrimitive::new(
                    title.clone(),
                    OUTER_PADDING_PX,
                    plot.y - TICK_LABEL_GAP_PX,
                    theme.base_font_size_px,
                    theme.text_color,
                    TextHAlign::Left,
                ));
            }
            _ => {
                frame = frame.with_text(TextPrimitive::new(
                    title.clone(),
                    plot.x + plot.width * 0.5,
                    f64::from(viewport.height) - OUTER_PADDING_PX * 0.5,
                    theme.base_font_size_px,
                    theme.text_color,
                    TextHAlign::Center,
                ));
            }
        }
    }

    // Series geometry.
    if matches!(kind, ChartKind::BarVertical | ChartKind::BarHorizontal) {
        let orientation = if kind == ChartKind::BarHorizontal {
            BarOrientation::Horizontal
        } else {
            BarOrientation::Vertical
        };
        let series_values: Vec<&[f64]> = spec.series.iter().map(|s| s.values.as_slice()).collect();
        let columns = project_bar_columns(&series_values, bands, scale, plot, orientation)?;
        for column in columns {
            let style = &spec.series[column.series].style;
            frame = frame.with_rect(
                RectPrimitive::filled(
                    column.x,
                    column.y,
                    column.width,
                    column.height,
                    style.fill.color_for(column.category),
                )
                .with_border(style.stroke.color_for(column.category), style.stroke_width),
            );
        }
    } else {
        for series in &spec.series {
            let style = &series.style;
            let points = project_category_points(&series.values, bands, scale, plot)?;

            // Filled area under the curve, closed along the baseline.
            if points.len() >= 2 {
                let mut area: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
                area.push((points[points.len() - 1].x, plot.bottom()));
                area.push((points[0].x, plot.bottom()));
                frame = frame.with_polygon(PolygonPrimitive::new(
                    area,
                    style.fill.color_for(0),
                    TRANSPARENT,
                    0.0,
                ));
            }

            for segment in connect_category_points(&points) {
                let mut line = LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    style.stroke_width,
                    style.stroke.color_for(0),
                );
                if !style.dash.is_empty() {
                    line = line.with_dash(style.dash.iter().copied());
                }
                frame = frame.with_line(line);
            }

            if style.point_radius > 0.0 {
                for point in &points {
                    frame = frame.with_marker(MarkerPrimitive::new(
                        point.x,
                        point.y,
                        style.point_radius,
                        style.stroke.color_for(point.category),
                    ));
                }
            }
        }
    }

    Ok(frame)
}

fn build_radar(
    mut frame: RenderFrame,
    spec: &ChartSpec,
    theme: &ChartTheme,
    viewport: Viewport,
    top: f64,
) -> ChartResult<RenderFrame> {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let axis = &spec.value_axis;
    let scale = RadialScale::new(axis.max)?;
    let count = spec.labels.len();

    let area = PlotArea::new(
        OUTER_PADDING_PX,
        top,
        width - OUTER_PADDING_PX * 2.0,
        height - top - OUTER_PADDING_PX,
    );
    area.validate()?;
    let (center_x, center_y) = area.center();
    let max_radius = (area.width.min(area.height) * 0.5) - RADAR_LABEL_MARGIN_PX;
    if max_radius <= 0.0 {
        return Err(ChartError::InvalidData(
            "viewport too small for a radar chart".to_owned(),
        ));
    }

    // Grid rings at each tick, spokes underneath the series polygons.
    for tick in axis.tick_values() {
        if tick <= axis.min {
            continue;
        }
        let radius = scale.radius(tick, max_radius)?;
        let ring: ChartResult<Vec<(f64, f64)>> = (0..count)
            .map(|index| {
                let angle = scale.spoke_angle(index, count)?;
                Ok((center_x + radius * angle.cos(), center_y + radius * angle.sin()))
            })
            .collect();
        frame = frame.with_polygon(PolygonPrimitive::new(
            ring?,
            TRANSPARENT,
            theme.grid_color,
            GRID_STROKE_PX,
        ));
        frame = frame.with_text(TextPrimitive::new(
            axis.tick_format.tick_label(tick),
            center_x - TICK_LABEL_GAP_PX,
            center_y - radius + theme.base_font_size_px * 0.35,
            theme.base_font_size_px,
            theme.text_color,
            TextHAlign::Right,
        ));
    }

    for (index, label) in spec.labels.iter().enumerate() {
        let angle = scale.spoke_angle(index, count)?;
        frame = frame.with_line(LinePrimitive::new(
            center_x,
            center_y,
            center_x + max_radius * angle.cos(),
            center_y + max_radius * angle.sin(),
            GRID_STROKE_PX,
            theme.grid_color,
        ));
        let label_radius = max_radius + RADAR_LABEL_MARGIN_PX * 0.5;
        frame = frame.with_text(TextPrimitive::new(
            label.clone(),
            center_x + label_radius * angle.cos(),
            center_y + label_radius * angle.sin() + theme.base_font_size_px * 0.35,
            theme.base_font_size_px,
            theme.text_color,
            TextHAlign::Center,
        ));
    }

    for series in &spec.series {
        let style = &series.style;
        let vertices =
            project_radar_polygon(&series.values, scale, center_x, center_y, max_radius)?;
        let points: Vec<(f64, f64)> = vertices.iter().map(|v| (v.x, v.y)).collect();
        frame = frame.with_polygon(PolygonPrimitive::new(
            points,
            style.fill.color_for(0),
            style.stroke.color_for(0),
            style.stroke_width,
        ));
        if style.point_radius > 0.0 {
            for vertex in &vertices {
                frame = frame.with_marker(MarkerPrimitive::new(
                    vertex.x,
                    vertex.y,
                    style.point_radius,
                    style.stroke.color_for(vertex.category),
                ));
            }
        }
    }

    Ok(frame)
}

/// Value-axis titles sit above the plot for vertical kinds, which costs a row
/// of vertical space before the plot area starts.
fn value_title_row_above(kind: ChartKind, value_title_row: f64) -> f64 {
    match kind {
        ChartKind::BarHorizontal => 0.0,
        _ => value_title_row,
    }
}

fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * 0.6
}

fn longest_width<'a>(texts: impl Iterator<Item = &'a String>, font_size_px: f64) -> f64 {
    texts
        .map(|t| estimate_text_width(t, font_size_px))
        .fold(0.0, f64::max)
}
