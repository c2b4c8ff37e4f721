//! Drawing boundary and the painters that emit commands through it.

mod axis;
mod candles;
mod crosshair;
mod grid;
mod primitives;
mod recording;
mod surface;
mod theme;

pub use axis::{
    AXIS_FONT, AXIS_LABEL_OFFSET_PX, AXIS_TICK_LENGTH_PX, PRICE_AXIS_SPACING_PX,
    TIME_AXIS_SPACING_PX, draw_price_axis, draw_time_axis,
};
pub use candles::{WICK_WIDTH, draw_candles};
pub use crosshair::{CROSSHAIR_DASH, draw_crosshair};
pub use grid::{GRID_LINE_WIDTH, GRID_PRICE_SPACING_PX, GRID_TIME_SPACING_PX, draw_grid};
pub use primitives::{Color, TextBaseline, TextHAlign};
pub use recording::{DashPattern, RecordedLine, RecordedRect, RecordedText, RecordingSurface};
pub use surface::{DrawingSurface, RenderTarget, prepare_surface, stroke_segment};
pub use theme::{ChartTheme, ThemeOverride};

use crate::core::Dimensions;

/// Fills the whole logical area with the theme background.
pub fn fill_background<S>(surface: &mut S, dimensions: Dimensions, theme: &ChartTheme)
where
    S: DrawingSurface + ?Sized,
{
    surface.set_fill_color(theme.background);
    surface.fill_rect(0.0, 0.0, dimensions.width, dimensions.height);
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
