use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_PADDING_PERCENT, Timeframe, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::DEFAULT_ZOOM_FACTOR;
use crate::render::ThemeOverride;

pub const DEFAULT_CHART_WIDTH: f64 = 800.0;
pub const DEFAULT_CHART_HEIGHT: f64 = 400.0;

/// Public engine bootstrap configuration.
///
/// Every field has a default, so a partial JSON document such as
/// `{"timeframe": 15}` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartEngineConfig {
    pub width: f64,
    pub height: f64,
    pub timeframe: Timeframe,
    /// Initial time window; honored only together with `price_range`.
    pub time_range: Option<(f64, f64)>,
    /// Initial price window; honored only together with `time_range`.
    pub price_range: Option<(f64, f64)>,
    pub padding_percent: f64,
    pub zoom_factor: f64,
    /// Trusted-source fast path: skip structural candle validation.
    pub skip_validation: bool,
    pub theme: ThemeOverride,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            timeframe: Timeframe::default(),
            time_range: None,
            price_range: None,
            padding_percent: DEFAULT_PADDING_PERCENT,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            skip_validation: false,
            theme: ThemeOverride::default(),
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }

    /// Sets both initial ranges at once.
    #[must_use]
    pub fn with_initial_ranges(mut self, time_range: (f64, f64), price_range: (f64, f64)) -> Self {
        self.time_range = Some(time_range);
        self.price_range = Some(price_range);
        self
    }

    #[must_use]
    pub fn with_padding_percent(mut self, padding_percent: f64) -> Self {
        self.padding_percent = padding_percent;
        self
    }

    #[must_use]
    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }

    #[must_use]
    pub fn with_skip_validation(mut self, skip_validation: bool) -> Self {
        self.skip_validation = skip_validation;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ThemeOverride) -> Self {
        self.theme = theme;
        self
    }

    /// Initial viewport candidate, present only when both ranges are set.
    #[must_use]
    pub fn initial_viewport(&self) -> Option<Viewport> {
        match (self.time_range, self.price_range) {
            (Some(time_range), Some(price_range)) => Some(Viewport::new(time_range, price_range)),
            _ => None,
        }
    }

    /// Rejects non-finite sizes and out-of-range tuning.
    ///
    /// Zero or negative sizes are accepted; rendering at such a size is
    /// skipped, the same as after a degenerate [`ChartEngine::resize`].
    ///
    /// [`ChartEngine::resize`]: crate::api::ChartEngine::resize
    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ChartError::DegenerateDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !self.padding_percent.is_finite() || self.padding_percent < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "padding percent must be finite and >= 0, got {}",
                self.padding_percent
            )));
        }
        if !self.zoom_factor.is_finite() || self.zoom_factor <= 0.0 || self.zoom_factor >= 1.0 {
            return Err(ChartError::InvalidData(format!(
                "zoom factor must be in (0, 1), got {}",
                self.zoom_factor
            )));
        }
        self.theme.validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize engine config: {e}")))
    }
}
