use approx::assert_relative_eq;
use report_charts::core::{
    CategoryBandScale, LinearScale, PlotArea, connect_category_points, project_category_points,
};

#[test]
fn points_sit_on_band_centers() {
    let bands = CategoryBandScale::new(4).expect("bands");
    let scale = LinearScale::new(0.0, 60.0).expect("scale");
    let plot = PlotArea::new(0.0, 0.0, 400.0, 300.0);

    let points = project_category_points(&[22.0, 43.0, 52.5, 41.0], bands, scale, plot)
        .expect("project");

    assert_eq!(points.len(), 4);
    assert_relative_eq!(points[0].x, 50.0);
    assert_relative_eq!(points[1].x, 150.0);
    assert_relative_eq!(points[3].x, 350.0);
    // Higher value maps to smaller screen y.
    assert!(points[2].y < points[0].y);
}

#[test]
fn segment_count_is_one_less_than_points() {
    let bands = CategoryBandScale::new(4).expect("bands");
    let scale = LinearScale::new(0.0, 60.0).expect("scale");
    let plot = PlotArea::new(0.0, 0.0, 400.0, 300.0);

    let points =
        project_category_points(&[10.0, 19.0, 26.0, 26.0], bands, scale, plot).expect("project");
    let segments = connect_category_points(&points);

    assert_eq!(segments.len(), 3);
    for (segment, pair) in segments.iter().zip(points.windows(2)) {
        assert_relative_eq!(segment.x1, pair[0].x);
        assert_relative_eq!(segment.y2, pair[1].y);
    }
}

#[test]
fn single_point_yields_no_segments() {
    let bands = CategoryBandScale::new(1).expect("bands");
    let scale = LinearScale::new(0.0, 10.0).expect("scale");
    let plot = PlotArea::new(0.0, 0.0, 100.0, 100.0);

    let points = project_category_points(&[5.0], bands, scale, plot).expect("project");
    assert!(connect_category_points(&points).is_empty());
}
