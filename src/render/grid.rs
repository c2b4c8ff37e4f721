use crate::core::{Dimensions, Scale, Viewport, calculate_graduations};
use crate::render::{ChartTheme, DrawingSurface, stroke_segment};

pub const GRID_LINE_WIDTH: f64 = 0.5;
/// Pixels per horizontal grid line.
pub const GRID_PRICE_SPACING_PX: f64 = 50.0;
/// Pixels per vertical grid line.
pub const GRID_TIME_SPACING_PX: f64 = 100.0;

/// Draws horizontal lines at price graduations and vertical lines at time graduations.
///
/// Vertical lines use the generic nice-number ticks, not the timeframe-aligned
/// ones from the time axis, so the grid is coarser than the axis labels.
pub fn draw_grid<S>(
    surface: &mut S,
    viewport: Viewport,
    scale: Scale,
    dimensions: Dimensions,
    theme: &ChartTheme,
) where
    S: DrawingSurface + ?Sized,
{
    surface.set_stroke_color(theme.grid_line);
    surface.set_line_width(GRID_LINE_WIDTH);

    let price_target = tick_target(dimensions.height, GRID_PRICE_SPACING_PX);
    for price in calculate_graduations(viewport.price_min(), viewport.price_max(), price_target) {
        let y = scale.y_to_pixel(price);
        stroke_segment(surface, (0.0, y), (dimensions.width, y));
    }

    let time_target = tick_target(dimensions.width, GRID_TIME_SPACING_PX);
    for time in calculate_graduations(viewport.time_min(), viewport.time_max(), time_target) {
        let x = scale.x_to_pixel(time);
        stroke_segment(surface, (x, 0.0), (x, dimensions.height));
    }
}

/// `floor(extent / spacing)`; zero for degenerate extents.
pub(crate) fn tick_target(extent_px: f64, spacing_px: f64) -> usize {
    if !extent_px.is_finite() || extent_px <= 0.0 {
        return 0;
    }
    (extent_px / spacing_px).floor() as usize
}
