use crate::core::{Candle, Dimensions, Scale, Timeframe, Viewport, candle_width_px};
use crate::interaction::PointerPosition;

/// Lower bound of the hover tolerance, in pixels.
const MIN_HIT_TOLERANCE_PX: f64 = 50.0;

/// Horizontal distance within which a candle counts as hovered.
#[must_use]
pub fn hit_tolerance_px(viewport: Viewport, main: Dimensions, timeframe: Timeframe) -> f64 {
    (candle_width_px(viewport, main.width, timeframe) * 2.0).max(MIN_HIT_TOLERANCE_PX)
}

/// Finds the candle horizontally closest to `pointer`.
///
/// Only the X coordinate matters. Candles more than two timeframes outside
/// the visible window are skipped. The closest candle is returned when it
/// lies strictly within [`hit_tolerance_px`]; ties keep the earliest candle
/// in dataset order.
#[must_use]
pub fn find_nearest_candle<'a>(
    pointer: PointerPosition,
    candles: &'a [Candle],
    viewport: Viewport,
    main: Dimensions,
    timeframe: Timeframe,
) -> Option<&'a Candle> {
    if candles.is_empty() {
        return None;
    }

    let scale = Scale::new(viewport, main);
    let max_distance = hit_tolerance_px(viewport, main, timeframe);
    let margin = timeframe.millis() * 2.0;
    let lower = viewport.time_min() - margin;
    let upper = viewport.time_max() + margin;

    let mut nearest: Option<(&Candle, f64)> = None;
    for candle in candles {
        let time = candle.time_f64();
        if time < lower || time > upper {
            continue;
        }
        let distance = (scale.x_to_pixel(time) - pointer.x).abs();
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((candle, distance));
        }
    }

    nearest
        .filter(|(_, distance)| *distance < max_distance)
        .map(|(candle, _)| candle)
}
