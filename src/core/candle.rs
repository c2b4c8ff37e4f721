use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::graduations::{format_timestamp_full, price_precision};
use crate::core::{Scale, Timeframe, Viewport};
use crate::error::{CandleDefect, ChartError, ChartResult};

pub const MIN_CANDLE_WIDTH_PX: f64 = 1.0;
pub const MAX_CANDLE_WIDTH_PX: f64 = 50.0;
/// Share of the per-candle slot filled by the body; the rest is gap.
pub const CANDLE_FILL_RATIO: f64 = 0.8;

/// One OHLC record; `time` is a unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    /// Builds a validated candle.
    ///
    /// Invariants:
    /// - all prices are finite
    /// - `high >= low`
    /// - `high >= max(open, close)` and `low <= min(open, close)`
    ///
    /// A rejected standalone candle is reported with `index: 0`.
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        let candle = Self {
            time,
            open,
            high,
            low,
            close,
        };
        candle
            .check()
            .map_err(|defect| ChartError::InvalidCandle { index: 0, defect })?;
        Ok(candle)
    }

    /// Converts strongly-typed temporal/decimal input into a validated candle.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            time.timestamp_millis(),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    /// Checks structural OHLC invariants without consuming the candle.
    pub fn check(&self) -> Result<(), CandleDefect> {
        if !self.open.is_finite()
            || !self.high.is_finite()
            || !self.low.is_finite()
            || !self.close.is_finite()
        {
            return Err(CandleDefect::NonFinite);
        }
        if self.high < self.low {
            return Err(CandleDefect::HighBelowLow);
        }
        if self.high < self.open.max(self.close) {
            return Err(CandleDefect::HighBelowBody);
        }
        if self.low > self.open.min(self.close) {
            return Err(CandleDefect::LowAboveBody);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    #[must_use]
    pub fn time_f64(&self) -> f64 {
        self.time as f64
    }
}

fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Pixel width of one candle body for the visible span.
///
/// Shared by the candle painter and the hit tester so the hover tolerance
/// follows what is on screen.
#[must_use]
pub fn candle_width_px(viewport: Viewport, width: f64, timeframe: Timeframe) -> f64 {
    let visible_candles = viewport.time_span() / timeframe.millis();
    let raw = width / visible_candles * CANDLE_FILL_RATIO;
    if raw.is_nan() {
        return MIN_CANDLE_WIDTH_PX;
    }
    raw.clamp(MIN_CANDLE_WIDTH_PX, MAX_CANDLE_WIDTH_PX)
}

/// Projected candle geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub center_x: f64,
    pub body_left: f64,
    pub body_top: f64,
    pub body_width: f64,
    pub body_height: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub is_bullish: bool,
}

/// Projects the candles near the visible window into render geometry.
///
/// Candles more than one timeframe outside `[time_min, time_max]` are
/// skipped. Bodies are at least one pixel tall so flat candles stay visible.
#[must_use]
pub fn project_candles(
    candles: &[Candle],
    scale: Scale,
    viewport: Viewport,
    timeframe: Timeframe,
) -> Vec<CandleGeometry> {
    let width = candle_width_px(viewport, scale.dimensions().width, timeframe);
    let tf_ms = timeframe.millis();
    let lower = viewport.time_min() - tf_ms;
    let upper = viewport.time_max() + tf_ms;
    let visible = |candle: &&Candle| {
        let time = candle.time_f64();
        time >= lower && time <= upper
    };

    #[cfg(feature = "parallel-projection")]
    {
        candles
            .par_iter()
            .filter(visible)
            .map(|candle| project_single_candle(candle, scale, width))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        candles
            .iter()
            .filter(visible)
            .map(|candle| project_single_candle(candle, scale, width))
            .collect()
    }
}

fn project_single_candle(candle: &Candle, scale: Scale, width: f64) -> CandleGeometry {
    let center_x = scale.x_to_pixel(candle.time_f64());
    let open_y = scale.y_to_pixel(candle.open);
    let close_y = scale.y_to_pixel(candle.close);

    CandleGeometry {
        center_x,
        body_left: center_x - width / 2.0,
        body_top: open_y.min(close_y),
        body_width: width,
        body_height: (close_y - open_y).abs().max(1.0),
        wick_top: scale.y_to_pixel(candle.high),
        wick_bottom: scale.y_to_pixel(candle.low),
        is_bullish: candle.is_bullish(),
    }
}

/// Info-box view of one candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleSummary {
    pub candle: Candle,
    pub change: f64,
    /// Change relative to open in percent; `0` when open is zero.
    pub change_percent: f64,
    pub is_bullish: bool,
    /// Decimal places used for every price field.
    pub precision: usize,
}

impl CandleSummary {
    #[must_use]
    pub fn from_candle(candle: Candle) -> Self {
        let change = candle.close - candle.open;
        let change_percent = if candle.open == 0.0 {
            0.0
        } else {
            change / candle.open * 100.0
        };
        Self {
            candle,
            change,
            change_percent,
            is_bullish: candle.is_bullish(),
            precision: price_precision(candle.high - candle.low),
        }
    }

    #[must_use]
    pub fn format_price(&self, price: f64) -> String {
        format!("{price:.prec$}", prec = self.precision)
    }

    /// `dd/mm/YYYY HH:MM:SS` in UTC.
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format_timestamp_full(self.candle.time)
    }

    /// Signed change followed by signed percent, e.g. `+1.25 (+0.84%)`.
    #[must_use]
    pub fn formatted_change(&self) -> String {
        let sign = if self.change >= 0.0 { "+" } else { "" };
        let percent_sign = if self.change_percent >= 0.0 { "+" } else { "" };
        format!(
            "{sign}{} ({percent_sign}{:.2}%)",
            self.format_price(self.change),
            self.change_percent
        )
    }
}
