//! ohlc-chart: interactive OHLC candlestick chart engine.
//!
//! The crate splits into pure math (`core`), pointer state and viewport
//! navigation (`interaction`), immediate-mode drawing through a host-supplied
//! surface (`render`), and the `ChartEngine` facade tying them together
//! (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartEvent, ChartSurfaces, ViewportUpdate};
pub use error::{CandleDefect, ChartError, ChartResult};
