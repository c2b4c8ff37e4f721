use tracing::{debug, trace, warn};

use crate::core::{Candle, Viewport, fit_to_data_checked, validate_viewport};
use crate::error::ChartError;
use crate::render::DrawingSurface;

use super::{ChartEngine, ChartEvent};

/// Outcome of a viewport mutation request.
///
/// A rejected update leaves the stored viewport untouched.
#[derive(Debug)]
pub enum ViewportUpdate {
    Accepted(Viewport),
    Rejected(ChartError),
}

impl ViewportUpdate {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    #[must_use]
    pub fn accepted(&self) -> Option<Viewport> {
        match self {
            Self::Accepted(viewport) => Some(*viewport),
            Self::Rejected(_) => None,
        }
    }
}

/// Owner of the single stored viewport.
///
/// Every mutation goes through [`ViewportManager::update`]; re-derivation
/// from data goes through [`ViewportManager::derive`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportManager {
    viewport: Viewport,
    initial: Option<Viewport>,
    padding_percent: f64,
}

impl ViewportManager {
    /// Creates a manager and derives the first viewport from `candles`.
    #[must_use]
    pub fn new(initial: Option<Viewport>, padding_percent: f64, candles: &[Candle]) -> Self {
        let mut manager = Self {
            viewport: Viewport::new((0.0, 1.0), (0.0, 1.0)),
            initial,
            padding_percent,
        };
        manager.derive(candles);
        manager
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Configured initial window, if any.
    #[must_use]
    pub fn initial(&self) -> Option<Viewport> {
        self.initial
    }

    #[must_use]
    pub fn padding_percent(&self) -> f64 {
        self.padding_percent
    }

    /// Resets the viewport after a data replacement.
    ///
    /// Uses the configured initial ranges when they validate, otherwise fits
    /// the data.
    pub fn derive(&mut self, candles: &[Candle]) -> Viewport {
        let derived = match self.initial.map(validate_viewport) {
            Some(Ok(viewport)) => viewport,
            Some(Err(err)) => {
                warn!(error = %err, "initial viewport rejected, fitting to data");
                fit_to_data_checked(candles, self.padding_percent)
            }
            None => fit_to_data_checked(candles, self.padding_percent),
        };
        debug!(
            candle_count = candles.len(),
            time_min = derived.time_min(),
            time_max = derived.time_max(),
            price_min = derived.price_min(),
            price_max = derived.price_max(),
            "derived viewport"
        );
        self.viewport = derived;
        derived
    }

    /// Fits the viewport to `candles`, ignoring any configured initial ranges.
    pub fn fit(&mut self, candles: &[Candle]) -> Viewport {
        self.viewport = fit_to_data_checked(candles, self.padding_percent);
        self.viewport
    }

    /// Validates `candidate` and stores it on success.
    pub fn update(&mut self, candidate: Viewport) -> ViewportUpdate {
        match validate_viewport(candidate) {
            Ok(viewport) => {
                trace!(
                    time_min = viewport.time_min(),
                    time_max = viewport.time_max(),
                    price_min = viewport.price_min(),
                    price_max = viewport.price_max(),
                    "viewport updated"
                );
                self.viewport = viewport;
                ViewportUpdate::Accepted(viewport)
            }
            Err(err) => {
                warn!(error = %err, "dropping invalid viewport update");
                ViewportUpdate::Rejected(err)
            }
        }
    }
}

impl<S: DrawingSurface> ChartEngine<S> {
    /// Programmatic viewport change, validated like pan and zoom.
    pub fn set_viewport(&mut self, candidate: Viewport) -> ViewportUpdate {
        self.submit_viewport(candidate)
    }

    /// Fits the viewport to the current dataset and notifies listeners.
    pub fn reset_viewport(&mut self) -> Viewport {
        let viewport = self.viewport.fit(&self.candles);
        self.emit(ChartEvent::ViewportChanged(viewport));
        viewport
    }

    pub(super) fn submit_viewport(&mut self, candidate: Viewport) -> ViewportUpdate {
        let update = self.viewport.update(candidate);
        if let Some(viewport) = update.accepted() {
            self.emit(ChartEvent::ViewportChanged(viewport));
        }
        update
    }
}
