use ohlc_chart::CandleDefect;
use ohlc_chart::core::{
    Candle, Viewport, is_sorted_by_time, last_visible_candle, prepare_candles, sort_by_time,
    validate_candles, validate_candles_with,
};
use proptest::prelude::*;

fn raw(time: i64, open: f64, high: f64, low: f64, close: f64) -> Candle {
    Candle {
        time,
        open,
        high,
        low,
        close,
    }
}

#[test]
fn high_below_low_is_rejected_and_well_formed_candle_is_kept() {
    let bad = raw(1, 10.0, 5.0, 20.0, 10.0);
    let good = raw(1, 10.0, 15.0, 5.0, 12.0);

    assert!(validate_candles(&[bad]).is_empty());
    assert_eq!(validate_candles(&[good]), vec![good]);
}

#[test]
fn rejection_callback_reports_index_and_defect() {
    let input = [
        raw(0, 10.0, 11.0, 9.0, 10.5),
        raw(1, f64::NAN, 11.0, 9.0, 10.0),
        raw(2, 10.0, 10.5, 9.0, 11.0),
        raw(3, 10.0, 12.0, 10.2, 11.0),
        raw(4, 10.0, 5.0, 20.0, 10.0),
    ];

    let mut rejected = Vec::new();
    let valid = validate_candles_with(&input, |index, _, defect| rejected.push((index, defect)));

    assert_eq!(valid, vec![input[0]]);
    assert_eq!(
        rejected,
        vec![
            (1, CandleDefect::NonFinite),
            (2, CandleDefect::HighBelowBody),
            (3, CandleDefect::LowAboveBody),
            (4, CandleDefect::HighBelowLow),
        ]
    );
}

#[test]
fn constructor_reports_defect() {
    let err = Candle::new(0, 10.0, 5.0, 20.0, 10.0).expect_err("high < low");
    assert_eq!(
        err.to_string(),
        "invalid candle at index 0: high must be >= low"
    );
}

#[test]
fn sort_is_stable_for_equal_timestamps() {
    let first = raw(100, 1.0, 1.0, 1.0, 1.0);
    let second = raw(100, 2.0, 2.0, 2.0, 2.0);
    let earlier = raw(50, 3.0, 3.0, 3.0, 3.0);

    let sorted = sort_by_time(vec![first, earlier, second]);

    assert_eq!(sorted, vec![earlier, first, second]);
}

#[test]
fn trusted_fast_path_skips_validation_but_still_sorts() {
    let invalid = raw(20, 10.0, 5.0, 20.0, 10.0);
    let valid = raw(10, 1.0, 2.0, 0.5, 1.5);

    let trusted = prepare_candles(vec![invalid, valid], true);
    assert_eq!(trusted.candles, vec![valid, invalid]);
    assert_eq!(trusted.rejected_count, 0);

    let checked = prepare_candles(vec![invalid, valid], false);
    assert_eq!(checked.candles, vec![valid]);
    assert_eq!(checked.rejected_count, 1);
}

#[test]
fn last_visible_candle_prefers_the_visible_window() {
    let candles = [
        raw(0, 1.0, 1.0, 1.0, 1.0),
        raw(60_000, 2.0, 2.0, 2.0, 2.0),
        raw(120_000, 3.0, 3.0, 3.0, 3.0),
    ];

    let middle_window = Viewport::new((30_000.0, 90_000.0), (0.0, 5.0));
    assert_eq!(last_visible_candle(&candles, middle_window), Some(&candles[1]));

    let gap_window = Viewport::new((70_000.0, 100_000.0), (0.0, 5.0));
    assert_eq!(last_visible_candle(&candles, gap_window), Some(&candles[1]));

    let before_all = Viewport::new((-90_000.0, -10_000.0), (0.0, 5.0));
    assert_eq!(last_visible_candle(&candles, before_all), Some(&candles[2]));

    assert_eq!(last_visible_candle(&[], middle_window), None);
}

proptest! {
    #[test]
    fn sorting_is_idempotent(times in prop::collection::vec(-1_000_000i64..1_000_000, 0..128)) {
        let candles: Vec<Candle> = times
            .iter()
            .enumerate()
            .map(|(index, &time)| raw(time, index as f64, index as f64, index as f64, index as f64))
            .collect();

        let once = sort_by_time(candles);
        prop_assert!(is_sorted_by_time(&once));

        let twice = sort_by_time(once.clone());
        prop_assert_eq!(once, twice);
    }
}
