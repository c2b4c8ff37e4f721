use tracing::debug;

use crate::core::{Candle, CandleSummary, last_visible_candle, prepare_candles};
use crate::render::DrawingSurface;

use super::{ChartEngine, ChartEvent};

impl<S: DrawingSurface> ChartEngine<S> {
    /// Replaces the dataset and re-derives the viewport from it.
    ///
    /// Emits [`ChartEvent::DataReplaced`] rather than a viewport change: the
    /// reset is not a user navigation.
    pub fn set_candles(&mut self, candles: Vec<Candle>) {
        let original_count = candles.len();
        let prepared = prepare_candles(candles, self.skip_validation);
        debug!(
            original_count,
            accepted = prepared.candles.len(),
            rejected = prepared.rejected_count,
            "set candles"
        );

        self.candles = prepared.candles;
        self.rejected_count = prepared.rejected_count;
        self.interaction.clear_hovered_candle();
        self.viewport.derive(&self.candles);

        self.emit(ChartEvent::DataReplaced {
            accepted: self.candles.len(),
            rejected: self.rejected_count,
        });
    }

    /// Validated, time-ascending candles.
    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// Candles dropped by the last validation pass.
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejected_count
    }

    /// Candle for the info box: the hovered one, else the last visible one.
    #[must_use]
    pub fn displayed_candle(&self) -> Option<Candle> {
        self.interaction
            .hovered_candle()
            .or_else(|| last_visible_candle(&self.candles, self.viewport.viewport()).copied())
    }

    #[must_use]
    pub fn displayed_summary(&self) -> Option<CandleSummary> {
        self.displayed_candle().map(CandleSummary::from_candle)
    }
}
