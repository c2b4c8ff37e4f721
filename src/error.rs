use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Reason a raw candle was rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CandleDefect {
    #[error("ohlc values must be finite")]
    NonFinite,

    #[error("high must be >= low")]
    HighBelowLow,

    #[error("high must be >= max(open, close)")]
    HighBelowBody,

    #[error("low must be <= min(open, close)")]
    LowAboveBody,
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid candle at index {index}: {defect}")]
    InvalidCandle { index: usize, defect: CandleDefect },

    #[error("invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("degenerate dimensions: width={width}, height={height}")]
    DegenerateDimension { width: f64, height: f64 },

    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
