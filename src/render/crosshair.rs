use crate::core::Dimensions;
use crate::interaction::PointerPosition;
use crate::render::{ChartTheme, DrawingSurface, stroke_segment};

pub const CROSSHAIR_DASH: [f64; 2] = [4.0, 4.0];

/// Dashed full-height and full-width guide lines through `position`.
pub fn draw_crosshair<S>(
    surface: &mut S,
    position: PointerPosition,
    dimensions: Dimensions,
    theme: &ChartTheme,
) where
    S: DrawingSurface + ?Sized,
{
    surface.set_stroke_color(theme.crosshair);
    surface.set_line_width(1.0);
    surface.set_line_dash(&CROSSHAIR_DASH);

    stroke_segment(surface, (position.x, 0.0), (position.x, dimensions.height));
    stroke_segment(surface, (0.0, position.y), (dimensions.width, position.y));

    surface.set_line_dash(&[]);
}
