use crate::core::{Candle, Viewport};
use crate::error::{ChartError, ChartResult};

/// Narrowest accepted time window, in milliseconds.
pub const MIN_TIME_SPAN_MS: f64 = 1_000.0;
/// Narrowest accepted price window.
pub const MIN_PRICE_SPAN: f64 = 0.0001;
pub const DEFAULT_PADDING_PERCENT: f64 = 0.05;

/// Viewport covering every candle, widened by `padding_percent` of each span on both sides.
///
/// An empty dataset yields the unit viewport `{(0, 1), (0, 1)}`. A single
/// candle yields zero-width ranges; callers run the result through
/// [`validate_viewport`] before use.
#[must_use]
pub fn fit_to_data(candles: &[Candle], padding_percent: f64) -> Viewport {
    let Some(first) = candles.first() else {
        return Viewport::new((0.0, 1.0), (0.0, 1.0));
    };

    let mut min_time = first.time;
    let mut max_time = first.time;
    let mut min_price = first.low;
    let mut max_price = first.high;
    for candle in candles {
        min_time = min_time.min(candle.time);
        max_time = max_time.max(candle.time);
        min_price = min_price.min(candle.low);
        max_price = max_price.max(candle.high);
    }

    let (min_time, max_time) = (min_time as f64, max_time as f64);
    let time_padding = (max_time - min_time) * padding_percent;
    let price_padding = (max_price - min_price) * padding_percent;

    Viewport::new(
        (min_time - time_padding, max_time + time_padding),
        (min_price - price_padding, max_price + price_padding),
    )
}

/// [`fit_to_data`] followed by validation, never failing.
///
/// A collapsed axis (single candle, flat prices) is centred on its value
/// with the minimum span so the data stays mid-screen. Non-finite input from
/// a trusted source degrades to `{(0, 1000), (0, 1)}`.
#[must_use]
pub fn fit_to_data_checked(candles: &[Candle], padding_percent: f64) -> Viewport {
    let fitted = fit_to_data(candles, padding_percent);
    let centred = Viewport::new(
        centre_collapsed(fitted.time_range, MIN_TIME_SPAN_MS),
        centre_collapsed(fitted.price_range, MIN_PRICE_SPAN),
    );
    validate_viewport(centred).unwrap_or(Viewport::new((0.0, MIN_TIME_SPAN_MS), (0.0, 1.0)))
}

fn centre_collapsed(range: (f64, f64), min_span: f64) -> (f64, f64) {
    if range.0 == range.1 {
        (range.0 - min_span / 2.0, range.1 + min_span / 2.0)
    } else {
        range
    }
}

/// Rejects malformed viewports and widens spans below the minimums.
///
/// Widening extends the upper bound only: a too-narrow window keeps its
/// `min` and gets `max = min + minimum`.
pub fn validate_viewport(viewport: Viewport) -> ChartResult<Viewport> {
    let (time_min, time_max) = viewport.time_range;
    let (price_min, price_max) = viewport.price_range;

    if !time_min.is_finite()
        || !time_max.is_finite()
        || !price_min.is_finite()
        || !price_max.is_finite()
    {
        return Err(ChartError::InvalidViewport(
            "all bounds must be finite".to_owned(),
        ));
    }
    if time_min >= time_max {
        return Err(ChartError::InvalidViewport(format!(
            "time min ({time_min}) must be less than time max ({time_max})"
        )));
    }
    if price_min >= price_max {
        return Err(ChartError::InvalidViewport(format!(
            "price min ({price_min}) must be less than price max ({price_max})"
        )));
    }

    let time_range = if time_max - time_min < MIN_TIME_SPAN_MS {
        (time_min, time_min + MIN_TIME_SPAN_MS)
    } else {
        (time_min, time_max)
    };
    let price_range = if price_max - price_min < MIN_PRICE_SPAN {
        (price_min, price_min + MIN_PRICE_SPAN)
    } else {
        (price_min, price_max)
    };

    Ok(Viewport::new(time_range, price_range))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_ranges_grow_upward_from_min() {
        let validated =
            validate_viewport(Viewport::new((100.0, 200.0), (5.0, 5.00001))).expect("valid");
        assert_eq!(validated.time_range, (100.0, 1_100.0));
        assert_eq!(validated.price_range.0, 5.0);
        assert!((validated.price_range.1 - 5.0001).abs() <= 1e-12);
    }

    #[test]
    fn checked_fit_centres_single_candle() {
        let candle = Candle::new(10_000, 5.0, 5.0, 5.0, 5.0).expect("flat candle");
        let viewport = fit_to_data_checked(&[candle], DEFAULT_PADDING_PERCENT);
        assert_eq!(viewport.time_range, (9_500.0, 10_500.0));
        assert!(viewport.price_min() < 5.0 && viewport.price_max() > 5.0);
    }

    #[test]
    fn checked_fit_of_empty_dataset_is_widened_unit_viewport() {
        let viewport = fit_to_data_checked(&[], DEFAULT_PADDING_PERCENT);
        assert_eq!(viewport, Viewport::new((0.0, 1_000.0), (0.0, 1.0)));
    }
}
