use tracing::debug;

use crate::core::{Candle, prepare_candles};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::DrawingSurface;

use super::{ChartEngine, ChartEngineConfig, ChartLayout, ChartSurfaces, ThemeController, ViewportManager};

impl<S: DrawingSurface> ChartEngine<S> {
    /// Creates an engine over `candles`, validating and sorting them first.
    ///
    /// Fails only on a malformed configuration. Invalid candles are dropped
    /// and invalid initial ranges fall back to fitting the data.
    pub fn new(
        surfaces: ChartSurfaces<S>,
        config: ChartEngineConfig,
        candles: Vec<Candle>,
    ) -> ChartResult<Self> {
        config.validate()?;

        let prepared = prepare_candles(candles, config.skip_validation);
        let viewport = ViewportManager::new(
            config.initial_viewport(),
            config.padding_percent,
            &prepared.candles,
        );
        debug!(
            width = config.width,
            height = config.height,
            timeframe = %config.timeframe,
            candle_count = prepared.candles.len(),
            rejected = prepared.rejected_count,
            "chart engine created"
        );

        Ok(Self {
            surfaces,
            layout: ChartLayout::from_size(config.width, config.height),
            timeframe: config.timeframe,
            zoom_factor: config.zoom_factor,
            skip_validation: config.skip_validation,
            candles: prepared.candles,
            rejected_count: prepared.rejected_count,
            viewport,
            theme: ThemeController::new(config.theme),
            interaction: InteractionState::default(),
            listeners: Vec::new(),
        })
    }
}
