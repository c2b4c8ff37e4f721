//! Axis tick generation ("nice numbers") and label formatting.

use chrono::{DateTime, Utc};

use crate::core::Timeframe;
use crate::core::timeframe::{DAY_MS, HOUR_MS, MINUTE_MS};

/// Hard ceiling on emitted ticks; only reachable with extreme zoom-out.
pub const MAX_GRADUATIONS: usize = 10_000;

const NICE_HOURS: [u32; 6] = [1, 2, 4, 6, 12, 24];
const NICE_QUARTERS: [u32; 5] = [1, 2, 4, 8, 16];
const NICE_TIMEFRAME_MULTIPLES: [u32; 7] = [1, 2, 5, 10, 15, 30, 60];
const QUARTER_MS: f64 = 15.0 * MINUTE_MS;

/// Evenly spaced "nice" values covering `[min, max]`.
///
/// The step is `span / target_count` snapped to `{1, 2, 5, 10} x 10^n`; the
/// first tick is the smallest step multiple `>= min`. A collapsed or invalid
/// range yields `[min]`. `target_count` of zero is treated as one.
#[must_use]
pub fn calculate_graduations(min: f64, max: f64, target_count: usize) -> Vec<f64> {
    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return vec![min];
    }

    let raw_step = range / target_count.max(1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let step = if normalized <= 1.0 {
        magnitude
    } else if normalized <= 2.0 {
        2.0 * magnitude
    } else if normalized <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };

    enumerate_aligned(min, max, step)
}

/// Time ticks aligned to candle boundaries of `timeframe`.
///
/// Step selection is tiered by timeframe:
/// - daily: whole days
/// - hourly: `{1, 2, 4, 6, 12, 24}` hours
/// - 15m and 30m: `{1, 2, 4, 8, 16}` quarter hours
/// - shorter: `{1, 2, 5, 10, 15, 30, 60}` candles
///
/// Within a tier only steps that are whole multiples of the candle duration
/// qualify, so every tick is a candle open time (epoch-aligned).
#[must_use]
pub fn calculate_time_graduations(
    min: f64,
    max: f64,
    target_count: usize,
    timeframe: Timeframe,
) -> Vec<f64> {
    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return vec![min];
    }

    let raw_step = range / target_count.max(1) as f64;
    let minutes = timeframe.minutes();
    let step = if minutes >= 1440 {
        let days = (raw_step / DAY_MS).ceil().max(1.0);
        days * DAY_MS
    } else if minutes >= 60 {
        let hours = snap_units(raw_step / HOUR_MS, &NICE_HOURS, minutes / 60);
        f64::from(hours) * HOUR_MS
    } else if minutes >= 15 {
        let quarters = snap_units(raw_step / QUARTER_MS, &NICE_QUARTERS, minutes / 15);
        f64::from(quarters) * QUARTER_MS
    } else {
        let multiples = snap_units(raw_step / timeframe.millis(), &NICE_TIMEFRAME_MULTIPLES, 1);
        f64::from(multiples) * timeframe.millis()
    };

    enumerate_aligned(min, max, step)
}

/// Smallest nice unit count covering `raw_units` that is a multiple of `unit_multiple`.
///
/// Falls back to the largest nice value once the list is exhausted.
fn snap_units(raw_units: f64, nice: &[u32], unit_multiple: u32) -> u32 {
    let needed = raw_units.ceil().max(1.0);
    let unit_multiple = unit_multiple.max(1);
    nice.iter()
        .copied()
        .find(|&units| units % unit_multiple == 0 && f64::from(units) >= needed)
        .unwrap_or_else(|| nice.last().copied().unwrap_or(1))
}

fn enumerate_aligned(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 {
        return vec![min];
    }

    let start = (min / step).ceil() * step;
    let mut values = Vec::new();
    for index in 0..MAX_GRADUATIONS {
        let value = start + index as f64 * step;
        if value > max {
            break;
        }
        values.push(value);
    }
    values
}

/// Decimal places for a price label given the visible price range.
#[must_use]
pub fn price_precision(range: f64) -> usize {
    if range < 0.01 {
        6
    } else if range < 0.1 {
        4
    } else if range < 10.0 {
        2
    } else if range < 1000.0 {
        1
    } else {
        0
    }
}

#[must_use]
pub fn format_price(price: f64, range: f64) -> String {
    format!("{price:.prec$}", prec = price_precision(range))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeLabelPattern {
    Date,
    DateMinute,
    Minute,
    Second,
}

impl TimeLabelPattern {
    fn strftime(self) -> &'static str {
        match self {
            TimeLabelPattern::Date => "%d/%m",
            TimeLabelPattern::DateMinute => "%d/%m %H:%M",
            TimeLabelPattern::Minute => "%H:%M",
            TimeLabelPattern::Second => "%H:%M:%S",
        }
    }
}

fn resolve_time_label_pattern(range: f64, timeframe: Timeframe) -> TimeLabelPattern {
    let minutes = timeframe.minutes();
    if minutes >= 1440 {
        TimeLabelPattern::Date
    } else if minutes >= 60 {
        if range > 2.0 * DAY_MS {
            TimeLabelPattern::DateMinute
        } else {
            TimeLabelPattern::Minute
        }
    } else if minutes >= 15 {
        if range > DAY_MS {
            TimeLabelPattern::DateMinute
        } else {
            TimeLabelPattern::Minute
        }
    } else if range > DAY_MS {
        TimeLabelPattern::DateMinute
    } else if range > 2.0 * HOUR_MS {
        TimeLabelPattern::Minute
    } else {
        TimeLabelPattern::Second
    }
}

/// Time-axis label (UTC) whose granularity follows timeframe and visible range.
#[must_use]
pub fn format_time(timestamp_ms: f64, range: f64, timeframe: Timeframe) -> String {
    let pattern = resolve_time_label_pattern(range, timeframe);
    match utc_from_millis(timestamp_ms) {
        Some(time) => time.format(pattern.strftime()).to_string(),
        None => format!("{timestamp_ms:.0}"),
    }
}

/// `dd/mm/YYYY HH:MM:SS` (UTC), used by the candle info box.
#[must_use]
pub fn format_timestamp_full(timestamp_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
        Some(time) => time.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => timestamp_ms.to_string(),
    }
}

fn utc_from_millis(timestamp_ms: f64) -> Option<DateTime<Utc>> {
    if !timestamp_ms.is_finite() {
        return None;
    }
    let millis = timestamp_ms.round();
    if millis > i64::MAX as f64 || millis < i64::MIN as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}
