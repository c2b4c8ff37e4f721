use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Color;

/// Colors used by every painter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub background: Color,
    pub bull_candle: Color,
    pub bear_candle: Color,
    pub bull_wick: Color,
    pub bear_wick: Color,
    pub axis_line: Color,
    pub axis_text: Color,
    pub grid_line: Color,
    pub crosshair: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        let bull = Color::from_rgba8(0x26, 0xa6, 0x9a, 0xff);
        let bear = Color::from_rgba8(0xef, 0x53, 0x50, 0xff);
        Self {
            background: Color::from_rgba8(0x1a, 0x1a, 0x2e, 0xff),
            bull_candle: bull,
            bear_candle: bear,
            bull_wick: bull,
            bear_wick: bear,
            axis_line: Color::from_rgba8(0x40, 0x40, 0x40, 0xff),
            axis_text: Color::from_rgba8(0xa0, 0xa0, 0xa0, 0xff),
            grid_line: Color::from_rgba8(0x2a, 0x2a, 0x3e, 0xff),
            crosshair: Color::from_rgba8(0x60, 0x60, 0x60, 0xff),
        }
    }
}

impl ChartTheme {
    #[must_use]
    pub fn candle_color(&self, bullish: bool) -> Color {
        if bullish {
            self.bull_candle
        } else {
            self.bear_candle
        }
    }

    #[must_use]
    pub fn wick_color(&self, bullish: bool) -> Color {
        if bullish { self.bull_wick } else { self.bear_wick }
    }
}

/// Partial theme; unset fields inherit from the layer below.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverride {
    pub background: Option<Color>,
    pub bull_candle: Option<Color>,
    pub bear_candle: Option<Color>,
    pub bull_wick: Option<Color>,
    pub bear_wick: Option<Color>,
    pub axis_line: Option<Color>,
    pub axis_text: Option<Color>,
    pub grid_line: Option<Color>,
    pub crosshair: Option<Color>,
}

impl ThemeOverride {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Rejects colors with channels outside `[0, 1]`.
    pub fn validate(&self) -> ChartResult<()> {
        [
            self.background,
            self.bull_candle,
            self.bear_candle,
            self.bull_wick,
            self.bear_wick,
            self.axis_line,
            self.axis_text,
            self.grid_line,
            self.crosshair,
        ]
        .into_iter()
        .flatten()
        .try_for_each(Color::validate)
    }

    /// Returns `base` with every set field replaced.
    #[must_use]
    pub fn apply(&self, base: ChartTheme) -> ChartTheme {
        ChartTheme {
            background: self.background.unwrap_or(base.background),
            bull_candle: self.bull_candle.unwrap_or(base.bull_candle),
            bear_candle: self.bear_candle.unwrap_or(base.bear_candle),
            bull_wick: self.bull_wick.unwrap_or(base.bull_wick),
            bear_wick: self.bear_wick.unwrap_or(base.bear_wick),
            axis_line: self.axis_line.unwrap_or(base.axis_line),
            axis_text: self.axis_text.unwrap_or(base.axis_text),
            grid_line: self.grid_line.unwrap_or(base.grid_line),
            crosshair: self.crosshair.unwrap_or(base.crosshair),
        }
    }
}

impl From<ChartTheme> for ThemeOverride {
    fn from(theme: ChartTheme) -> Self {
        Self {
            background: Some(theme.background),
            bull_candle: Some(theme.bull_candle),
            bear_candle: Some(theme.bear_candle),
            bull_wick: Some(theme.bull_wick),
            bear_wick: Some(theme.bear_wick),
            axis_line: Some(theme.axis_line),
            axis_text: Some(theme.axis_text),
            grid_line: Some(theme.grid_line),
            crosshair: Some(theme.crosshair),
        }
    }
}
