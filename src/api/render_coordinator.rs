use tracing::warn;

use crate::error::ChartResult;
use crate::render::{
    DrawingSurface, draw_candles, draw_crosshair, draw_grid, draw_price_axis, draw_time_axis,
    fill_background, prepare_surface,
};

use super::ChartEngine;

/// Which regions produced drawing in one [`ChartEngine::render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderedRegions {
    pub main: bool,
    /// `true` only when crosshair lines were drawn, not for a cleared overlay.
    pub crosshair: bool,
    pub price_axis: bool,
    pub time_axis: bool,
}

impl<S: DrawingSurface> ChartEngine<S> {
    /// Redraws every region from current state.
    ///
    /// Regions are independent: a failing pass is logged and reported as not
    /// drawn without stopping the others.
    pub fn render(&mut self) -> RenderedRegions {
        let main = self.render_main();
        let crosshair = self.render_crosshair();
        let price_axis = self.render_price_axis();
        let time_axis = self.render_time_axis();
        RenderedRegions {
            main: settle("main", main),
            crosshair: settle("crosshair", crosshair),
            price_axis: settle("price_axis", price_axis),
            time_axis: settle("time_axis", time_axis),
        }
    }

    /// Background, grid and candles on the main plot.
    pub fn render_main(&mut self) -> ChartResult<bool> {
        let dimensions = self.layout.main;
        let viewport = self.viewport.viewport();
        let scale = self.scale();
        let theme = self.theme.theme();
        let timeframe = self.timeframe;
        let candles = &self.candles;

        self.surfaces.main.draw(|surface| {
            if !prepare_surface(surface, dimensions) {
                return false;
            }
            surface.clear_rect(0.0, 0.0, dimensions.width, dimensions.height);
            fill_background(surface, dimensions, &theme);
            draw_grid(surface, viewport, scale, dimensions, &theme);
            draw_candles(surface, candles, scale, viewport, timeframe, &theme);
            true
        })
    }

    /// Clears the overlay and draws the crosshair when the pointer is on the plot.
    pub fn render_crosshair(&mut self) -> ChartResult<bool> {
        let dimensions = self.layout.main;
        let position = self.interaction.crosshair_position();
        let theme = self.theme.theme();

        self.surfaces.crosshair.draw(|surface| {
            if !prepare_surface(surface, dimensions) {
                return false;
            }
            surface.clear_rect(0.0, 0.0, dimensions.width, dimensions.height);
            let Some(position) = position else {
                return false;
            };
            draw_crosshair(surface, position, dimensions, &theme);
            true
        })
    }

    pub fn render_price_axis(&mut self) -> ChartResult<bool> {
        let dimensions = self.layout.price_axis;
        let viewport = self.viewport.viewport();
        let theme = self.theme.theme();

        self.surfaces.price_axis.draw(|surface| {
            if !prepare_surface(surface, dimensions) {
                return false;
            }
            fill_background(surface, dimensions, &theme);
            draw_price_axis(surface, viewport, dimensions, &theme);
            true
        })
    }

    pub fn render_time_axis(&mut self) -> ChartResult<bool> {
        let dimensions = self.layout.time_axis;
        let viewport = self.viewport.viewport();
        let timeframe = self.timeframe;
        let theme = self.theme.theme();

        self.surfaces.time_axis.draw(|surface| {
            if !prepare_surface(surface, dimensions) {
                return false;
            }
            fill_background(surface, dimensions, &theme);
            draw_time_axis(surface, viewport, dimensions, timeframe, &theme);
            true
        })
    }
}

fn settle(region: &'static str, result: ChartResult<bool>) -> bool {
    result.unwrap_or_else(|err| {
        warn!(region, error = %err, "region render failed");
        false
    })
}
