//! Host-facing engine facade and its controllers.

mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod events;
mod interaction_controller;
mod layout;
mod render_coordinator;
mod theme_controller;
mod viewport_controller;

pub use engine::{ChartEngine, ChartSurfaces};
pub use engine_config::{ChartEngineConfig, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
pub use events::{ChartEvent, ChartEventListener};
pub use layout::{ChartLayout, PRICE_AXIS_WIDTH_PX, TIME_AXIS_HEIGHT_PX};
pub use render_coordinator::RenderedRegions;
pub use theme_controller::ThemeController;
pub use viewport_controller::{ViewportManager, ViewportUpdate};
