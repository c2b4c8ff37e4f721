use tracing::{trace, warn};

use crate::core::{Candle, Viewport};
use crate::error::CandleDefect;

/// Keeps structurally valid candles, reporting each rejected one to `on_invalid`.
///
/// The callback receives the index in the original input, the candle and
/// the reason it was dropped. Input order is preserved.
pub fn validate_candles_with<F>(candles: &[Candle], mut on_invalid: F) -> Vec<Candle>
where
    F: FnMut(usize, &Candle, CandleDefect),
{
    let mut valid = Vec::with_capacity(candles.len());
    for (index, candle) in candles.iter().enumerate() {
        match candle.check() {
            Ok(()) => valid.push(*candle),
            Err(defect) => on_invalid(index, candle, defect),
        }
    }
    valid
}

/// Keeps structurally valid candles, logging the ones it drops.
#[must_use]
pub fn validate_candles(candles: &[Candle]) -> Vec<Candle> {
    let valid = validate_candles_with(candles, |index, candle, defect| {
        trace!(index, time = candle.time, %defect, "dropping invalid candle");
    });
    let filtered_count = candles.len() - valid.len();
    if filtered_count > 0 {
        warn!(
            filtered_count,
            total_count = candles.len(),
            "filtered invalid candles"
        );
    }
    valid
}

#[must_use]
pub fn is_sorted_by_time(candles: &[Candle]) -> bool {
    candles.windows(2).all(|pair| pair[0].time <= pair[1].time)
}

/// Stable ascending sort by time; already-sorted input is returned untouched.
#[must_use]
pub fn sort_by_time(mut candles: Vec<Candle>) -> Vec<Candle> {
    if !is_sorted_by_time(&candles) {
        candles.sort_by_key(|candle| candle.time);
    }
    candles
}

/// Dataset ready for scales, painters and hit-testing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreparedDataset {
    pub candles: Vec<Candle>,
    pub rejected_count: usize,
}

/// Validates (unless `trusted`) and sorts raw candles.
///
/// `trusted` skips structural validation for sources that already guarantee
/// valid candles; ordering is still enforced since the check is linear.
#[must_use]
pub fn prepare_candles(raw: Vec<Candle>, trusted: bool) -> PreparedDataset {
    if trusted {
        return PreparedDataset {
            candles: sort_by_time(raw),
            rejected_count: 0,
        };
    }

    let valid = validate_candles(&raw);
    let rejected_count = raw.len() - valid.len();
    PreparedDataset {
        candles: sort_by_time(valid),
        rejected_count,
    }
}

/// Candle to show when nothing is hovered.
///
/// Prefers the last candle inside the visible time range, then the last
/// candle before its end, then the final candle of the dataset.
#[must_use]
pub fn last_visible_candle(candles: &[Candle], viewport: Viewport) -> Option<&Candle> {
    candles
        .iter()
        .rev()
        .find(|candle| viewport.contains_time(candle.time_f64()))
        .or_else(|| {
            candles
                .iter()
                .rev()
                .find(|candle| candle.time_f64() <= viewport.time_max())
        })
        .or_else(|| candles.last())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(time: i64) -> Candle {
        Candle {
            time,
            open: 10.0,
            high: 12.0,
            low: 9.0,
            close: 11.0,
        }
    }

    #[test]
    fn sort_keeps_equal_times_in_input_order() {
        let mut first = candle(5);
        first.close = 10.5;
        let second = candle(5);
        let sorted = sort_by_time(vec![candle(9), first, second]);
        assert_eq!(sorted, vec![first, second, candle(9)]);
    }

    #[test]
    fn last_visible_falls_back_to_candle_before_range_end() {
        let candles = vec![candle(0), candle(10), candle(100)];
        let viewport = Viewport::new((20.0, 50.0), (0.0, 1.0));
        assert_eq!(last_visible_candle(&candles, viewport), Some(&candle(10)));
    }

    #[test]
    fn last_visible_falls_back_to_final_candle() {
        let candles = vec![candle(100), candle(200)];
        let viewport = Viewport::new((0.0, 50.0), (0.0, 1.0));
        assert_eq!(last_visible_candle(&candles, viewport), Some(&candle(200)));
        assert_eq!(last_visible_candle(&[], viewport), None);
    }
}
