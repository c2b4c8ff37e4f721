use serde::{Deserialize, Serialize};

use crate::core::Dimensions;

/// Width of the price axis strip right of the main plot.
pub const PRICE_AXIS_WIDTH_PX: f64 = 70.0;
/// Height of the time axis strip below the main plot.
pub const TIME_AXIS_HEIGHT_PX: f64 = 30.0;

/// Split of the chart area into its canvas regions.
///
/// Sizes are not clamped: a chart smaller than the axis strips yields a
/// degenerate main plot, which rendering skips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub total: Dimensions,
    pub main: Dimensions,
    pub price_axis: Dimensions,
    pub time_axis: Dimensions,
}

impl ChartLayout {
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        let main = Dimensions::new(width - PRICE_AXIS_WIDTH_PX, height - TIME_AXIS_HEIGHT_PX);
        Self {
            total: Dimensions::new(width, height),
            main,
            price_axis: Dimensions::new(PRICE_AXIS_WIDTH_PX, main.height),
            time_axis: Dimensions::new(main.width, TIME_AXIS_HEIGHT_PX),
        }
    }
}
