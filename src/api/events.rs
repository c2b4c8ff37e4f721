use crate::core::Viewport;
use crate::render::ChartTheme;

/// Notifications delivered to registered listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    /// A pan, zoom or programmatic update was accepted.
    ViewportChanged(Viewport),
    /// A theme override was applied or cleared; carries the effective theme.
    ThemeChanged(ChartTheme),
    /// The dataset was replaced and the viewport re-derived from it.
    DataReplaced { accepted: usize, rejected: usize },
}

/// Receives engine notifications synchronously, in emission order.
pub trait ChartEventListener {
    fn on_event(&mut self, event: &ChartEvent);
}

impl<F> ChartEventListener for F
where
    F: FnMut(&ChartEvent),
{
    fn on_event(&mut self, event: &ChartEvent) {
        self(event);
    }
}
