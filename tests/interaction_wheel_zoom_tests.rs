use approx::assert_relative_eq;
use ohlc_chart::api::{ChartEngine, ChartEngineConfig, ChartSurfaces};
use ohlc_chart::core::{Dimensions, Scale, Viewport};
use ohlc_chart::interaction::{PointerPosition, WheelModifiers, zoom_viewport};
use ohlc_chart::render::RecordingSurface;

const MAIN: Dimensions = Dimensions::new(730.0, 370.0);

fn base_viewport() -> Viewport {
    Viewport::new((0.0, 1_000.0), (0.0, 10.0))
}

fn zoom(delta_y: f64, modifiers: WheelModifiers) -> Option<Viewport> {
    let viewport = base_viewport();
    let scale = Scale::new(viewport, MAIN);
    let pointer = PointerPosition::new(scale.x_to_pixel(500.0), scale.y_to_pixel(5.0));
    zoom_viewport(viewport, scale, pointer, delta_y, modifiers, 0.1)
}

#[test]
fn wheel_up_without_modifiers_shrinks_time_only() {
    let zoomed = zoom(-120.0, WheelModifiers::default()).expect("non-zero delta");

    assert!(zoomed.time_span() < base_viewport().time_span());
    assert_relative_eq!(zoomed.time_min(), 50.0);
    assert_relative_eq!(zoomed.time_max(), 950.0);
    assert_eq!(zoomed.price_range, base_viewport().price_range);
}

#[test]
fn wheel_down_zooms_out() {
    let zoomed = zoom(120.0, WheelModifiers::default()).expect("non-zero delta");
    assert_relative_eq!(zoomed.time_span(), 1_100.0, epsilon = 1e-9);
}

#[test]
fn alt_zooms_price_only() {
    let zoomed = zoom(
        -1.0,
        WheelModifiers {
            alt: true,
            ctrl: false,
        },
    )
    .expect("non-zero delta");

    assert_eq!(zoomed.time_range, base_viewport().time_range);
    assert_relative_eq!(zoomed.price_min(), 0.5, epsilon = 1e-9);
    assert_relative_eq!(zoomed.price_max(), 9.5, epsilon = 1e-9);
}

#[test]
fn ctrl_zooms_both_axes() {
    let zoomed = zoom(
        -1.0,
        WheelModifiers {
            alt: false,
            ctrl: true,
        },
    )
    .expect("non-zero delta");

    assert!(zoomed.time_span() < base_viewport().time_span());
    assert!(zoomed.price_span() < base_viewport().price_span());
}

#[test]
fn zero_delta_is_ignored() {
    assert!(zoom(0.0, WheelModifiers::default()).is_none());
    assert!(zoom(f64::NAN, WheelModifiers::default()).is_none());
}

#[test]
fn data_point_under_pointer_stays_put() {
    let viewport = Viewport::new((10_000.0, 70_000.0), (100.0, 200.0));
    let scale = Scale::new(viewport, MAIN);
    let pointer = PointerPosition::new(200.0, 80.0);
    let anchor_time = scale.pixel_to_x(pointer.x);
    let anchor_price = scale.pixel_to_y(pointer.y);

    let zoomed = zoom_viewport(
        viewport,
        scale,
        pointer,
        -1.0,
        WheelModifiers {
            alt: true,
            ctrl: true,
        },
        0.25,
    )
    .expect("non-zero delta");
    let zoomed_scale = Scale::new(zoomed, MAIN);

    assert_relative_eq!(zoomed_scale.pixel_to_x(pointer.x), anchor_time, epsilon = 1e-6);
    assert_relative_eq!(zoomed_scale.pixel_to_y(pointer.y), anchor_price, epsilon = 1e-9);
}

#[test]
fn engine_wheel_updates_stored_viewport() {
    let config = ChartEngineConfig::default()
        .with_initial_ranges((0.0, 730_000.0), (0.0, 370.0));
    let mut engine = ChartEngine::new(
        ChartSurfaces::<RecordingSurface>::default(),
        config,
        Vec::new(),
    )
    .expect("engine init");

    let update = engine
        .wheel(
            PointerPosition::new(365.0, 185.0),
            -120.0,
            WheelModifiers::default(),
        )
        .expect("non-zero delta");

    let accepted = update.accepted().expect("zoom result is valid");
    assert_eq!(engine.viewport(), accepted);
    assert_relative_eq!(accepted.time_span(), 657_000.0, epsilon = 1e-6);
    assert_eq!(accepted.price_range, (0.0, 370.0));
}

#[test]
fn engine_zoom_below_minimum_span_is_widened_not_rejected() {
    let config = ChartEngineConfig::default().with_initial_ranges((0.0, 1_000.0), (0.0, 10.0));
    let mut engine = ChartEngine::new(
        ChartSurfaces::<RecordingSurface>::default(),
        config,
        Vec::new(),
    )
    .expect("engine init");

    let update = engine
        .wheel(
            PointerPosition::new(365.0, 185.0),
            -1.0,
            WheelModifiers::default(),
        )
        .expect("non-zero delta");

    let accepted = update.accepted().expect("narrow zoom is widened");
    assert_relative_eq!(accepted.time_min(), 50.0);
    assert_relative_eq!(accepted.time_span(), 1_000.0);
}
