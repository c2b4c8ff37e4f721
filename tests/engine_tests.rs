use std::cell::RefCell;
use std::rc::Rc;

use ohlc_chart::api::{
    ChartEngine, ChartEngineConfig, ChartEvent, ChartSurfaces, RenderedRegions, ViewportUpdate,
};
use ohlc_chart::core::{Candle, Timeframe, Viewport, fit_to_data_checked};
use ohlc_chart::interaction::{PointerPosition, WheelModifiers};
use ohlc_chart::render::{ChartTheme, Color, RecordingSurface, ThemeOverride};
use ohlc_chart::{ChartError, ChartResult};

fn sample_candles() -> Vec<Candle> {
    (0..10)
        .map(|i| {
            let base = 100.0 + i as f64;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 0.5 };
            Candle::new(i * 60_000, base, base + 2.0, base - 1.0, close).expect("candle")
        })
        .collect()
}

fn engine_with(config: ChartEngineConfig) -> ChartResult<ChartEngine<RecordingSurface>> {
    ChartEngine::new(ChartSurfaces::default(), config, sample_candles())
}

fn record_events(engine: &mut ChartEngine<RecordingSurface>) -> Rc<RefCell<Vec<ChartEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    engine.add_listener(move |event: &ChartEvent| sink.borrow_mut().push(*event));
    events
}

#[test]
fn new_engine_fits_sorted_valid_data() {
    let mut raw = sample_candles();
    raw.reverse();
    raw.push(Candle {
        time: 5,
        open: 1.0,
        high: 0.5,
        low: 2.0,
        close: 1.0,
    });

    let engine = ChartEngine::new(
        ChartSurfaces::<RecordingSurface>::default(),
        ChartEngineConfig::default(),
        raw,
    )
    .expect("engine init");

    assert_eq!(engine.candles(), sample_candles().as_slice());
    assert_eq!(engine.rejected_count(), 1);
    assert_eq!(engine.viewport(), fit_to_data_checked(&sample_candles(), 0.05));
}

#[test]
fn invalid_config_is_rejected() {
    let err = engine_with(ChartEngineConfig::default().with_zoom_factor(1.5))
        .err()
        .expect("zoom factor out of range");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = engine_with(ChartEngineConfig::default().with_size(f64::NAN, 400.0))
        .err()
        .expect("non-finite width");
    assert!(matches!(err, ChartError::DegenerateDimension { .. }));
}

#[test]
fn zero_sized_engine_constructs_and_skips_drawing() {
    let mut engine = engine_with(ChartEngineConfig::default().with_size(0.0, 0.0))
        .expect("zero size is not an error");
    assert_eq!(engine.render(), RenderedRegions::default());

    let mut engine = engine_with(ChartEngineConfig::default().with_size(-10.0, 400.0))
        .expect("negative size is not an error");
    assert_eq!(engine.render(), RenderedRegions::default());

    engine.resize(800.0, 400.0);
    assert!(engine.render().main);
}

#[test]
fn initial_ranges_are_used_when_valid() {
    let engine = engine_with(
        ChartEngineConfig::default().with_initial_ranges((0.0, 120_000.0), (90.0, 120.0)),
    )
    .expect("engine init");
    assert_eq!(
        engine.viewport(),
        Viewport::new((0.0, 120_000.0), (90.0, 120.0))
    );
}

#[test]
fn invalid_initial_ranges_fall_back_to_fit() {
    let engine = engine_with(
        ChartEngineConfig::default().with_initial_ranges((100.0, 100.0), (0.0, 10.0)),
    )
    .expect("engine init");
    assert_eq!(
        engine.viewport(),
        fit_to_data_checked(&sample_candles(), 0.05)
    );
}

#[test]
fn accepted_updates_notify_and_rejected_ones_do_not() {
    let mut engine = engine_with(ChartEngineConfig::default()).expect("engine init");
    let events = record_events(&mut engine);
    let before = engine.viewport();

    let rejected = engine.set_viewport(Viewport::new((10.0, 5.0), (0.0, 1.0)));
    assert!(matches!(
        rejected,
        ViewportUpdate::Rejected(ChartError::InvalidViewport(_))
    ));
    assert_eq!(engine.viewport(), before);
    assert!(events.borrow().is_empty());

    let target = Viewport::new((0.0, 300_000.0), (95.0, 115.0));
    assert!(engine.set_viewport(target).is_accepted());
    engine.wheel(
        PointerPosition::new(300.0, 100.0),
        -1.0,
        WheelModifiers::default(),
    );

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], ChartEvent::ViewportChanged(target));
    assert_eq!(events[1], ChartEvent::ViewportChanged(engine.viewport()));
}

#[test]
fn replacing_data_reports_counts_without_viewport_event() {
    let mut engine = engine_with(ChartEngineConfig::default()).expect("engine init");
    engine.set_viewport(Viewport::new((0.0, 60_000.0), (0.0, 1.0)));
    let events = record_events(&mut engine);

    let mut replacement: Vec<Candle> = sample_candles().into_iter().take(4).collect();
    replacement.push(Candle {
        time: 1,
        open: f64::NAN,
        high: 1.0,
        low: 0.0,
        close: 0.5,
    });
    engine.set_candles(replacement);

    assert_eq!(
        *events.borrow(),
        vec![ChartEvent::DataReplaced {
            accepted: 4,
            rejected: 1
        }]
    );
    assert_eq!(engine.rejected_count(), 1);
    assert_eq!(
        engine.viewport(),
        fit_to_data_checked(&engine.candles()[..], 0.05)
    );
}

#[test]
fn reset_viewport_refits_and_notifies() {
    let mut engine = engine_with(ChartEngineConfig::default()).expect("engine init");
    engine.set_viewport(Viewport::new((0.0, 5_000.0), (0.0, 1.0)));
    let events = record_events(&mut engine);

    let fitted = engine.reset_viewport();

    assert_eq!(fitted, fit_to_data_checked(&sample_candles(), 0.05));
    assert_eq!(*events.borrow(), vec![ChartEvent::ViewportChanged(fitted)]);
}

#[test]
fn displayed_candle_falls_back_to_last_visible() {
    let mut engine = engine_with(ChartEngineConfig::default()).expect("engine init");
    let candles = sample_candles();
    assert_eq!(engine.displayed_candle(), Some(candles[9]));

    engine.set_viewport(Viewport::new((100_000.0, 250_000.0), (90.0, 120.0)));
    assert_eq!(engine.displayed_candle(), Some(candles[4]));

    let x = engine.scale().x_to_pixel(candles[2].time as f64);
    engine.pointer_move(PointerPosition::new(x, 10.0));
    assert_eq!(engine.displayed_candle(), Some(candles[2]));
}

#[test]
fn summary_describes_the_displayed_candle() {
    let engine = engine_with(ChartEngineConfig::default()).expect("engine init");
    let summary = engine.displayed_summary().expect("non-empty dataset");

    assert_eq!(summary.candle.time, 540_000);
    assert!(!summary.is_bullish);
    assert_eq!(summary.precision, 2);
    assert_eq!(summary.format_price(summary.candle.close), "108.50");
    assert_eq!(summary.formatted_change(), "-0.50 (-0.46%)");
    assert_eq!(summary.formatted_time(), "01/01/1970 00:09:00");
}

#[test]
fn empty_dataset_has_nothing_to_display() {
    let engine = ChartEngine::new(
        ChartSurfaces::<RecordingSurface>::default(),
        ChartEngineConfig::default(),
        Vec::new(),
    )
    .expect("engine init");
    assert_eq!(engine.displayed_candle(), None);
    assert_eq!(engine.viewport(), Viewport::new((0.0, 1_000.0), (0.0, 1.0)));
}

#[test]
fn timeframe_change_keeps_viewport() {
    let mut engine = engine_with(ChartEngineConfig::default()).expect("engine init");
    let before = engine.viewport();

    engine.set_timeframe(Timeframe::H1);

    assert_eq!(engine.timeframe(), Timeframe::H1);
    assert_eq!(engine.viewport(), before);
    assert_eq!(engine.config().timeframe, Timeframe::H1);
}

#[test]
fn theme_overrides_layer_and_notify() {
    let host_bg = Color::from_hex("#000000").expect("hex");
    let local_bg = Color::from_hex("#ffffff").expect("hex");
    let mut engine = engine_with(ChartEngineConfig::default().with_theme(ThemeOverride {
        background: Some(host_bg),
        ..ThemeOverride::default()
    }))
    .expect("engine init");
    let events = record_events(&mut engine);
    assert_eq!(engine.theme().background, host_bg);

    let theme = engine
        .set_theme_override(ThemeOverride {
            background: Some(local_bg),
            ..ThemeOverride::default()
        })
        .expect("valid override");
    assert_eq!(theme.background, local_bg);
    assert_eq!(theme.bull_candle, ChartTheme::default().bull_candle);

    assert!(engine.clear_theme_override());
    assert!(!engine.clear_theme_override());
    assert_eq!(engine.theme().background, host_bg);

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], ChartEvent::ThemeChanged(theme));
    assert!(matches!(events[1], ChartEvent::ThemeChanged(t) if t.background == host_bg));
}

#[test]
fn rendered_background_follows_theme() {
    let mut engine = engine_with(ChartEngineConfig::default()).expect("engine init");
    let red = Color::rgb(1.0, 0.0, 0.0);
    engine
        .set_theme_override(ThemeOverride {
            background: Some(red),
            ..ThemeOverride::default()
        })
        .expect("valid override");

    engine.render();

    for target in [
        &engine.surfaces().main,
        &engine.surfaces().price_axis,
        &engine.surfaces().time_axis,
    ] {
        let surface = target.surface().expect("surface");
        assert_eq!(surface.rects()[0].color, red, "{}", target.name());
    }
}
