use approx::assert_relative_eq;
use report_charts::ChartError;
use report_charts::core::{RadialScale, project_radar_polygon};

#[test]
fn polygon_has_one_vertex_per_value() {
    let scale = RadialScale::new(150.0).expect("scale");
    let vertices = project_radar_polygon(
        &[27.0, 64.0, 33.5, 135.0, 90.0],
        scale,
        200.0,
        200.0,
        120.0,
    )
    .expect("project");

    assert_eq!(vertices.len(), 5);
    for (index, vertex) in vertices.iter().enumerate() {
        assert_eq!(vertex.category, index);
    }
}

#[test]
fn first_vertex_lies_straight_above_center() {
    let scale = RadialScale::new(100.0).expect("scale");
    let vertices =
        project_radar_polygon(&[50.0, 50.0, 50.0], scale, 200.0, 200.0, 100.0).expect("project");

    assert_relative_eq!(vertices[0].x, 200.0, max_relative = 1e-9);
    assert_relative_eq!(vertices[0].y, 150.0, max_relative = 1e-9);
}

#[test]
fn vertices_stay_within_max_radius() {
    let scale = RadialScale::new(150.0).expect("scale");
    let vertices = project_radar_polygon(
        &[150.0, 135.0, 90.0, 0.0, 75.0],
        scale,
        100.0,
        100.0,
        80.0,
    )
    .expect("project");

    for vertex in &vertices {
        let dx = vertex.x - 100.0;
        let dy = vertex.y - 100.0;
        assert!((dx * dx + dy * dy).sqrt() <= 80.0 + 1e-9);
    }
}

#[test]
fn fewer_than_three_categories_is_rejected() {
    let scale = RadialScale::new(10.0).expect("scale");
    let err = project_radar_polygon(&[1.0, 2.0], scale, 0.0, 0.0, 50.0);
    assert!(matches!(err, Err(ChartError::InvalidData(_))));
}
