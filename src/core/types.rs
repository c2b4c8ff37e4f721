use serde::{Deserialize, Serialize};

/// Logical pixel size of one drawing region.
///
/// Dimensions are supplied per render call and never stored by the
/// rendering code; zero or negative sizes are representable and treated as
/// "nothing to draw".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` when both sides are finite and strictly positive.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Visible `(time, price)` window of the chart.
///
/// Time bounds are unix milliseconds stored as `f64` so zoom and pan can land
/// between candle boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub time_range: (f64, f64),
    pub price_range: (f64, f64),
}

impl Viewport {
    #[must_use]
    pub const fn new(time_range: (f64, f64), price_range: (f64, f64)) -> Self {
        Self {
            time_range,
            price_range,
        }
    }

    #[must_use]
    pub fn time_min(self) -> f64 {
        self.time_range.0
    }

    #[must_use]
    pub fn time_max(self) -> f64 {
        self.time_range.1
    }

    #[must_use]
    pub fn price_min(self) -> f64 {
        self.price_range.0
    }

    #[must_use]
    pub fn price_max(self) -> f64 {
        self.price_range.1
    }

    #[must_use]
    pub fn time_span(self) -> f64 {
        self.time_range.1 - self.time_range.0
    }

    #[must_use]
    pub fn price_span(self) -> f64 {
        self.price_range.1 - self.price_range.0
    }

    /// Returns the viewport translated by additive data-space deltas.
    #[must_use]
    pub fn shifted(self, time_delta: f64, price_delta: f64) -> Self {
        Self {
            time_range: (self.time_range.0 + time_delta, self.time_range.1 + time_delta),
            price_range: (
                self.price_range.0 + price_delta,
                self.price_range.1 + price_delta,
            ),
        }
    }

    #[must_use]
    pub fn contains_time(self, time: f64) -> bool {
        time >= self.time_range.0 && time <= self.time_range.1
    }
}
