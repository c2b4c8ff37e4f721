pub mod candle;
pub mod dataset;
pub mod graduations;
pub mod scale;
pub mod timeframe;
pub mod types;
pub mod viewport;

pub use candle::{
    CANDLE_FILL_RATIO, Candle, CandleGeometry, CandleSummary, MAX_CANDLE_WIDTH_PX,
    MIN_CANDLE_WIDTH_PX, candle_width_px, project_candles,
};
pub use dataset::{
    PreparedDataset, is_sorted_by_time, last_visible_candle, prepare_candles, sort_by_time,
    validate_candles, validate_candles_with,
};
pub use graduations::{
    MAX_GRADUATIONS, calculate_graduations, calculate_time_graduations, format_price,
    format_time, format_timestamp_full, price_precision,
};
pub use scale::Scale;
pub use timeframe::{DAY_MS, HOUR_MS, MINUTE_MS, Timeframe};
pub use types::{Dimensions, Viewport};
pub use viewport::{
    DEFAULT_PADDING_PERCENT, MIN_PRICE_SPAN, MIN_TIME_SPAN_MS, fit_to_data, fit_to_data_checked,
    validate_viewport,
};
