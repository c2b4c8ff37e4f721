use crate::core::{Candle, Scale, Timeframe, Viewport, project_candles};
use crate::render::{ChartTheme, DrawingSurface, stroke_segment};

pub const WICK_WIDTH: f64 = 1.0;

/// Draws a wick and a filled body for every candle near the visible window.
///
/// Colors follow `close >= open` (bull) versus `close < open` (bear).
pub fn draw_candles<S>(
    surface: &mut S,
    candles: &[Candle],
    scale: Scale,
    viewport: Viewport,
    timeframe: Timeframe,
    theme: &ChartTheme,
) where
    S: DrawingSurface + ?Sized,
{
    if candles.is_empty() {
        return;
    }

    surface.set_line_width(WICK_WIDTH);
    for geometry in project_candles(candles, scale, viewport, timeframe) {
        surface.set_stroke_color(theme.wick_color(geometry.is_bullish));
        stroke_segment(
            surface,
            (geometry.center_x, geometry.wick_top),
            (geometry.center_x, geometry.wick_bottom),
        );

        surface.set_fill_color(theme.candle_color(geometry.is_bullish));
        surface.fill_rect(
            geometry.body_left,
            geometry.body_top,
            geometry.body_width,
            geometry.body_height,
        );
    }
}
