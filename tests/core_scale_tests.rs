use approx::assert_relative_eq;
use ohlc_chart::core::{Dimensions, Scale, Viewport};

fn scale() -> Scale {
    Scale::new(
        Viewport::new((1_000.0, 11_000.0), (50.0, 150.0)),
        Dimensions::new(1_000.0, 500.0),
    )
}

#[test]
fn x_maps_linearly_left_to_right() {
    let scale = scale();
    assert_relative_eq!(scale.x_to_pixel(1_000.0), 0.0);
    assert_relative_eq!(scale.x_to_pixel(6_000.0), 500.0);
    assert_relative_eq!(scale.x_to_pixel(11_000.0), 1_000.0);
}

#[test]
fn y_is_inverted_so_high_prices_sit_near_the_top() {
    let scale = scale();
    assert_relative_eq!(scale.y_to_pixel(150.0), 0.0);
    assert_relative_eq!(scale.y_to_pixel(50.0), 500.0);
    assert!(scale.y_to_pixel(120.0) < scale.y_to_pixel(80.0));
}

#[test]
fn pixel_inverse_matches_forward_mapping() {
    let scale = scale();
    assert_relative_eq!(scale.pixel_to_x(250.0), 3_500.0);
    assert_relative_eq!(scale.pixel_to_y(100.0), 130.0);
}

#[test]
fn degenerate_span_maps_to_midpoint() {
    let scale = Scale::new(
        Viewport::new((42.0, 42.0), (7.0, 7.0)),
        Dimensions::new(800.0, 400.0),
    );
    assert_eq!(scale.x_to_pixel(1.0e12), 400.0);
    assert_eq!(scale.y_to_pixel(-3.0), 200.0);
}

#[test]
fn zero_size_maps_pixels_to_range_minimum() {
    let scale = Scale::new(
        Viewport::new((10.0, 20.0), (1.0, 2.0)),
        Dimensions::new(0.0, 0.0),
    );
    assert_eq!(scale.pixel_to_x(123.0), 10.0);
    assert_eq!(scale.pixel_to_y(45.0), 1.0);
}
