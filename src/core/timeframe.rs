use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const MINUTE_MS: f64 = 60_000.0;
pub const HOUR_MS: f64 = 60.0 * MINUTE_MS;
pub const DAY_MS: f64 = 24.0 * HOUR_MS;

/// Duration represented by one candle.
///
/// Serialized as its minute count; deserialization rejects values outside
/// the supported set.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum Timeframe {
    #[default]
    M1,
    M2,
    M3,
    M5,
    M10,
    M15,
    M30,
    H1,
    H2,
    H4,
    D1,
}

impl Timeframe {
    /// Every supported timeframe in ascending duration.
    pub const ALL: [Timeframe; 11] = [
        Timeframe::M1,
        Timeframe::M2,
        Timeframe::M3,
        Timeframe::M5,
        Timeframe::M10,
        Timeframe::M15,
        Timeframe::M30,
        Timeframe::H1,
        Timeframe::H2,
        Timeframe::H4,
        Timeframe::D1,
    ];

    #[must_use]
    pub const fn minutes(self) -> u32 {
        match self {
            Timeframe::M1 => 1,
            Timeframe::M2 => 2,
            Timeframe::M3 => 3,
            Timeframe::M5 => 5,
            Timeframe::M10 => 10,
            Timeframe::M15 => 15,
            Timeframe::M30 => 30,
            Timeframe::H1 => 60,
            Timeframe::H2 => 120,
            Timeframe::H4 => 240,
            Timeframe::D1 => 1440,
        }
    }

    /// Candle duration in milliseconds.
    #[must_use]
    pub fn millis(self) -> f64 {
        f64::from(self.minutes()) * MINUTE_MS
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Timeframe::M1 => "1m",
            Timeframe::M2 => "2m",
            Timeframe::M3 => "3m",
            Timeframe::M5 => "5m",
            Timeframe::M10 => "10m",
            Timeframe::M15 => "15m",
            Timeframe::M30 => "30m",
            Timeframe::H1 => "1h",
            Timeframe::H2 => "2h",
            Timeframe::H4 => "4h",
            Timeframe::D1 => "1D",
        }
    }
}

impl TryFrom<u32> for Timeframe {
    type Error = ChartError;

    fn try_from(minutes: u32) -> ChartResult<Self> {
        Timeframe::ALL
            .into_iter()
            .find(|timeframe| timeframe.minutes() == minutes)
            .ok_or_else(|| ChartError::InvalidData(format!("unsupported timeframe: {minutes}m")))
    }
}

impl From<Timeframe> for u32 {
    fn from(timeframe: Timeframe) -> Self {
        timeframe.minutes()
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
