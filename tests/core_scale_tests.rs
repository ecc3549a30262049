use approx::assert_relative_eq;
use report_charts::ChartError;
use report_charts::core::{CategoryBandScale, LinearScale, RadialScale};
use std::f64::consts::FRAC_PI_2;

#[test]
fn linear_scale_rejects_degenerate_domain() {
    assert!(matches!(
        LinearScale::new(5.0, 5.0),
        Err(ChartError::InvalidData(_))
    ));
    assert!(matches!(
        LinearScale::new(f64::NAN, 1.0),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn linear_scale_maps_domain_ends_to_span_ends() {
    let scale = LinearScale::new(0.0, 100.0).expect("valid scale");
    assert_relative_eq!(scale.domain_to_pixel(0.0, 400.0).expect("to pixel"), 0.0);
    assert_relative_eq!(scale.domain_to_pixel(100.0, 400.0).expect("to pixel"), 400.0);
    assert_relative_eq!(scale.domain_to_pixel(50.0, 400.0).expect("to pixel"), 200.0);
}

#[test]
fn linear_scale_round_trips_through_pixels() {
    let scale = LinearScale::new(-20.0, 60.0).expect("valid scale");
    let px = scale.domain_to_pixel(13.5, 333.0).expect("to pixel");
    let value = scale.pixel_to_domain(px, 333.0).expect("from pixel");
    assert_relative_eq!(value, 13.5, max_relative = 1e-12);
}

#[test]
fn linear_scale_rejects_invalid_span() {
    let scale = LinearScale::new(0.0, 1.0).expect("valid scale");
    assert!(scale.domain_to_pixel(0.5, 0.0).is_err());
    assert!(scale.domain_to_pixel(0.5, f64::INFINITY).is_err());
}

#[test]
fn band_scale_requires_categories() {
    assert!(matches!(
        CategoryBandScale::new(0),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn band_scale_centers_are_mid_band() {
    let bands = CategoryBandScale::new(4).expect("bands");
    assert_relative_eq!(bands.band_width(400.0).expect("width"), 100.0);
    assert_relative_eq!(bands.center(0, 400.0).expect("center"), 50.0);
    assert_relative_eq!(bands.center(3, 400.0).expect("center"), 350.0);
}

#[test]
fn band_scale_bounds_stay_inside_band() {
    let bands = CategoryBandScale::new(4).expect("bands");
    let (start, end) = bands.band_bounds(0, 400.0).expect("bounds");
    assert!(start > 0.0);
    assert!(end < 100.0);
    assert!(start < end);
}

#[test]
fn band_scale_rejects_out_of_range_index() {
    let bands = CategoryBandScale::new(2).expect("bands");
    assert!(bands.center(2, 100.0).is_err());
}

#[test]
fn radial_scale_first_spoke_points_up() {
    let scale = RadialScale::new(150.0).expect("scale");
    let angle = scale.spoke_angle(0, 5).expect("angle");
    assert_relative_eq!(angle, -FRAC_PI_2);
}

#[test]
fn radial_scale_radius_is_proportional_and_clamped() {
    let scale = RadialScale::new(150.0).expect("scale");
    assert_relative_eq!(scale.radius(75.0, 100.0).expect("radius"), 50.0);
    assert_relative_eq!(scale.radius(300.0, 100.0).expect("radius"), 100.0);
}

#[test]
fn radial_scale_rejects_negative_values() {
    let scale = RadialScale::new(150.0).expect("scale");
    assert!(scale.radius(-1.0, 100.0).is_err());
}
