use crate::core::{
    Dimensions, Scale, Timeframe, Viewport, calculate_graduations, calculate_time_graduations,
    format_price, format_time,
};
use crate::render::grid::tick_target;
use crate::render::{ChartTheme, DrawingSurface, TextBaseline, TextHAlign, stroke_segment};

pub const AXIS_FONT: &str = "11px monospace";
pub const AXIS_TICK_LENGTH_PX: f64 = 5.0;
pub const AXIS_LABEL_OFFSET_PX: f64 = 8.0;
pub const PRICE_AXIS_SPACING_PX: f64 = 50.0;
pub const TIME_AXIS_SPACING_PX: f64 = 120.0;

/// Price ticks and left-aligned labels for the vertical axis strip.
///
/// `dimensions` is the strip size; only its height drives the mapping.
pub fn draw_price_axis<S>(
    surface: &mut S,
    viewport: Viewport,
    dimensions: Dimensions,
    theme: &ChartTheme,
) where
    S: DrawingSurface + ?Sized,
{
    let scale = Scale::new(viewport, Dimensions::new(1.0, dimensions.height));
    let range = viewport.price_span();
    let target = tick_target(dimensions.height, PRICE_AXIS_SPACING_PX);

    surface.set_font(AXIS_FONT);
    surface.set_text_align(TextHAlign::Left);
    surface.set_text_baseline(TextBaseline::Middle);
    surface.set_line_width(1.0);

    for price in calculate_graduations(viewport.price_min(), viewport.price_max(), target) {
        let y = scale.y_to_pixel(price);
        surface.set_stroke_color(theme.axis_line);
        stroke_segment(surface, (0.0, y), (AXIS_TICK_LENGTH_PX, y));

        surface.set_fill_color(theme.axis_text);
        surface.fill_text(&format_price(price, range), AXIS_LABEL_OFFSET_PX, y);
    }
}

/// Timeframe-aligned ticks and centered labels for the horizontal axis strip.
pub fn draw_time_axis<S>(
    surface: &mut S,
    viewport: Viewport,
    dimensions: Dimensions,
    timeframe: Timeframe,
    theme: &ChartTheme,
) where
    S: DrawingSurface + ?Sized,
{
    let scale = Scale::new(viewport, Dimensions::new(dimensions.width, 1.0));
    let range = viewport.time_span();
    let target = tick_target(dimensions.width, TIME_AXIS_SPACING_PX);

    surface.set_font(AXIS_FONT);
    surface.set_text_align(TextHAlign::Center);
    surface.set_text_baseline(TextBaseline::Top);
    surface.set_line_width(1.0);

    for time in
        calculate_time_graduations(viewport.time_min(), viewport.time_max(), target, timeframe)
    {
        let x = scale.x_to_pixel(time);
        surface.set_stroke_color(theme.axis_line);
        stroke_segment(surface, (x, 0.0), (x, AXIS_TICK_LENGTH_PX));

        surface.set_fill_color(theme.axis_text);
        surface.fill_text(
            &format_time(time, range, timeframe),
            x,
            AXIS_LABEL_OFFSET_PX,
        );
    }
}
