use tracing::trace;

use crate::core::Candle;
use crate::interaction::{
    InteractionMode, PointerButton, PointerPosition, WheelModifiers, find_nearest_candle,
    pan_viewport, zoom_viewport,
};
use crate::render::DrawingSurface;

use super::{ChartEngine, ViewportUpdate};

impl<S: DrawingSurface> ChartEngine<S> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn hovered_candle(&self) -> Option<Candle> {
        self.interaction.hovered_candle()
    }

    #[must_use]
    pub fn mouse_position(&self) -> Option<PointerPosition> {
        self.interaction.mouse_position()
    }

    /// Where the crosshair is drawn; hidden while panning or off-plot.
    #[must_use]
    pub fn crosshair_position(&self) -> Option<PointerPosition> {
        self.interaction.crosshair_position()
    }

    /// Zooms about the pointer. Returns `None` for a zero or non-finite delta.
    pub fn wheel(
        &mut self,
        position: PointerPosition,
        delta_y: f64,
        modifiers: WheelModifiers,
    ) -> Option<ViewportUpdate> {
        let candidate = zoom_viewport(
            self.viewport.viewport(),
            self.scale(),
            position,
            delta_y,
            modifiers,
            self.zoom_factor,
        )?;
        Some(self.submit_viewport(candidate))
    }

    /// Starts a pan on primary-button press. Returns `true` when a pan started.
    pub fn pointer_down(&mut self, button: PointerButton, position: PointerPosition) -> bool {
        let viewport = self.viewport.viewport();
        let started = self.interaction.on_pointer_down(button, position, viewport);
        if started {
            trace!(x = position.x, y = position.y, "pan started");
        }
        started
    }

    /// Tracks the pointer, refreshes the hovered candle and continues a pan.
    ///
    /// Returns the viewport update when a pan is active.
    pub fn pointer_move(&mut self, position: PointerPosition) -> Option<ViewportUpdate> {
        let hovered = find_nearest_candle(
            position,
            &self.candles,
            self.viewport.viewport(),
            self.layout.main,
            self.timeframe,
        )
        .copied();
        if hovered != self.interaction.hovered_candle() {
            trace!(time = hovered.map(|candle| candle.time), "hovered candle changed");
        }
        self.interaction.on_pointer_move(position, hovered);

        let snapshot = self.interaction.pan_snapshot()?;
        let candidate = pan_viewport(snapshot, position, self.layout.main);
        Some(self.submit_viewport(candidate))
    }

    /// Ends an active pan. Returns `true` when a pan was active.
    pub fn pointer_up(&mut self) -> bool {
        let ended = self.interaction.on_pointer_up();
        if ended {
            trace!("pan ended");
        }
        ended
    }

    /// Hides the crosshair and ends any pan; the hovered candle stays for the info box.
    pub fn pointer_leave(&mut self) -> bool {
        let ended = self.interaction.on_pointer_leave();
        trace!(pan_ended = ended, "pointer left plot");
        ended
    }
}
