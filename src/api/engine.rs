use tracing::debug;

use crate::core::{Candle, Scale, Timeframe, Viewport};
use crate::interaction::InteractionState;
use crate::render::{DrawingSurface, RenderTarget};

use super::{
    ChartEngineConfig, ChartEvent, ChartEventListener, ChartLayout, ThemeController,
    ViewportManager,
};

/// The four canvas regions a chart draws into.
#[derive(Debug)]
pub struct ChartSurfaces<S> {
    pub main: RenderTarget<S>,
    /// Transparent overlay above `main`, redrawn on every pointer move.
    pub crosshair: RenderTarget<S>,
    pub price_axis: RenderTarget<S>,
    pub time_axis: RenderTarget<S>,
}

impl<S: DrawingSurface> ChartSurfaces<S> {
    #[must_use]
    pub fn new(main: S, crosshair: S, price_axis: S, time_axis: S) -> Self {
        Self {
            main: RenderTarget::new("main", main),
            crosshair: RenderTarget::new("crosshair", crosshair),
            price_axis: RenderTarget::new("price_axis", price_axis),
            time_axis: RenderTarget::new("time_axis", time_axis),
        }
    }

    /// Builds targets from whatever the host could provide; missing ones
    /// are logged once and never drawn.
    #[must_use]
    pub fn from_options(
        main: Option<S>,
        crosshair: Option<S>,
        price_axis: Option<S>,
        time_axis: Option<S>,
    ) -> Self {
        Self {
            main: RenderTarget::from_option("main", main),
            crosshair: RenderTarget::from_option("crosshair", crosshair),
            price_axis: RenderTarget::from_option("price_axis", price_axis),
            time_axis: RenderTarget::from_option("time_axis", time_axis),
        }
    }
}

impl<S: DrawingSurface + Default> Default for ChartSurfaces<S> {
    fn default() -> Self {
        Self::new(S::default(), S::default(), S::default(), S::default())
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the dataset, the stored viewport, the layered theme
/// and the transient pointer state, and redraws its surfaces on request.
pub struct ChartEngine<S: DrawingSurface> {
    pub(super) surfaces: ChartSurfaces<S>,
    pub(super) layout: ChartLayout,
    pub(super) timeframe: Timeframe,
    pub(super) zoom_factor: f64,
    pub(super) skip_validation: bool,
    pub(super) candles: Vec<Candle>,
    pub(super) rejected_count: usize,
    pub(super) viewport: ViewportManager,
    pub(super) theme: ThemeController,
    pub(super) interaction: InteractionState,
    pub(super) listeners: Vec<Box<dyn ChartEventListener>>,
}

impl<S: DrawingSurface> ChartEngine<S> {
    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    /// Changes the chart size; degenerate sizes are kept and skip drawing.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.layout = ChartLayout::from_size(width, height);
        debug!(width, height, "chart resized");
    }

    #[must_use]
    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Switches the candle duration without refitting the viewport.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        if self.timeframe != timeframe {
            debug!(from = %self.timeframe, to = %timeframe, "timeframe changed");
            self.timeframe = timeframe;
        }
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    /// Scale for the main plot under the current viewport and layout.
    #[must_use]
    pub fn scale(&self) -> Scale {
        Scale::new(self.viewport.viewport(), self.layout.main)
    }

    #[must_use]
    pub fn surfaces(&self) -> &ChartSurfaces<S> {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut ChartSurfaces<S> {
        &mut self.surfaces
    }

    #[must_use]
    pub fn into_surfaces(self) -> ChartSurfaces<S> {
        self.surfaces
    }

    /// Registers a listener for viewport, theme and data notifications.
    pub fn add_listener<L>(&mut self, listener: L)
    where
        L: ChartEventListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub(super) fn emit(&mut self, event: ChartEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }

    /// Current settings expressed as a configuration.
    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        let initial = self.viewport.initial();
        ChartEngineConfig {
            width: self.layout.total.width,
            height: self.layout.total.height,
            timeframe: self.timeframe,
            time_range: initial.map(|viewport| viewport.time_range),
            price_range: initial.map(|viewport| viewport.price_range),
            padding_percent: self.viewport.padding_percent(),
            zoom_factor: self.zoom_factor,
            skip_validation: self.skip_validation,
            theme: self.theme.host_override(),
        }
    }
}
