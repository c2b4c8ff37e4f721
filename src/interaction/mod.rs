//! Pointer/wheel interaction state and the viewport math it drives.

mod hit_test;

pub use hit_test::{find_nearest_candle, hit_tolerance_px};

use serde::{Deserialize, Serialize};

use crate::core::{Candle, Dimensions, Scale, Viewport};

pub const DEFAULT_ZOOM_FACTOR: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Pixel position relative to the main plot's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Modifier keys held during a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WheelModifiers {
    pub alt: bool,
    pub ctrl: bool,
}

/// Axes affected by one wheel zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomAxes {
    pub time: bool,
    pub price: bool,
}

impl ZoomAxes {
    /// No modifier zooms time, Alt zooms price, Ctrl (with or without Alt) zooms both.
    #[must_use]
    pub fn from_modifiers(modifiers: WheelModifiers) -> Self {
        if modifiers.ctrl {
            return Self {
                time: true,
                price: true,
            };
        }
        Self {
            time: !modifiers.alt,
            price: modifiers.alt,
        }
    }
}

/// Pointer origin and viewport captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanSnapshot {
    pub origin: PointerPosition,
    pub viewport: Viewport,
}

/// Transient per-session pointer state.
///
/// Independent from the stored viewport: it only remembers where the
/// pointer is, which candle it last hovered and the drag snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pan: Option<PanSnapshot>,
    mouse_position: Option<PointerPosition>,
    hovered_candle: Option<Candle>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.pan.is_some() {
            InteractionMode::Panning
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    #[must_use]
    pub fn pan_snapshot(&self) -> Option<PanSnapshot> {
        self.pan
    }

    #[must_use]
    pub fn mouse_position(&self) -> Option<PointerPosition> {
        self.mouse_position
    }

    #[must_use]
    pub fn hovered_candle(&self) -> Option<Candle> {
        self.hovered_candle
    }

    /// Crosshair is shown while the pointer is over the plot and no drag is active.
    #[must_use]
    pub fn crosshair_position(&self) -> Option<PointerPosition> {
        if self.is_panning() {
            return None;
        }
        self.mouse_position
    }

    /// Starts a pan on primary-button press. Returns `true` when a pan started.
    pub fn on_pointer_down(
        &mut self,
        button: PointerButton,
        position: PointerPosition,
        viewport: Viewport,
    ) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        self.pan = Some(PanSnapshot {
            origin: position,
            viewport,
        });
        true
    }

    pub fn on_pointer_move(&mut self, position: PointerPosition, hovered: Option<Candle>) {
        self.mouse_position = Some(position);
        self.hovered_candle = hovered;
    }

    /// Ends an active pan. Returns `true` when a pan was active.
    pub fn on_pointer_up(&mut self) -> bool {
        self.pan.take().is_some()
    }

    /// Hides the crosshair and ends any pan; the hovered candle is kept.
    ///
    /// Returns `true` when a pan was active.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.mouse_position = None;
        self.on_pointer_up()
    }

    pub fn clear_hovered_candle(&mut self) {
        self.hovered_candle = None;
    }
}

/// Zooms around the data point under the pointer.
///
/// `delta_y < 0` zooms in (factor `1 - zoom_factor`), `delta_y > 0` zooms
/// out (factor `1 + zoom_factor`). Axes not selected by `modifiers` pass
/// through unchanged. Returns `None` for a zero or non-finite delta.
#[must_use]
pub fn zoom_viewport(
    viewport: Viewport,
    scale: Scale,
    pointer: PointerPosition,
    delta_y: f64,
    modifiers: WheelModifiers,
    zoom_factor: f64,
) -> Option<Viewport> {
    if !delta_y.is_finite() || delta_y == 0.0 {
        return None;
    }

    let factor = if delta_y < 0.0 {
        1.0 - zoom_factor
    } else {
        1.0 + zoom_factor
    };
    let axes = ZoomAxes::from_modifiers(modifiers);
    let time_at_pointer = scale.pixel_to_x(pointer.x);
    let price_at_pointer = scale.pixel_to_y(pointer.y);

    let time_range = if axes.time {
        zoom_range(viewport.time_range, time_at_pointer, factor)
    } else {
        viewport.time_range
    };
    let price_range = if axes.price {
        zoom_range(viewport.price_range, price_at_pointer, factor)
    } else {
        viewport.price_range
    };

    Some(Viewport::new(time_range, price_range))
}

fn zoom_range(range: (f64, f64), anchor: f64, factor: f64) -> (f64, f64) {
    (
        anchor - (anchor - range.0) * factor,
        anchor + (range.1 - anchor) * factor,
    )
}

/// Viewport for a drag from `snapshot.origin` to `pointer`.
///
/// Deltas are scaled by the spans captured at drag start, not the live
/// viewport, so repeated moves do not compound. Dragging right moves back in
/// time; dragging down moves the price window up.
#[must_use]
pub fn pan_viewport(snapshot: PanSnapshot, pointer: PointerPosition, main: Dimensions) -> Viewport {
    if !main.is_valid() {
        return snapshot.viewport;
    }

    let dx = pointer.x - snapshot.origin.x;
    let dy = pointer.y - snapshot.origin.y;
    let time_delta = -(dx / main.width) * snapshot.viewport.time_span();
    let price_delta = dy / main.height * snapshot.viewport.price_span();
    snapshot.viewport.shifted(time_delta, price_delta)
}
