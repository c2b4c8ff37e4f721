use tracing::debug;

use crate::error::ChartResult;
use crate::render::{ChartTheme, DrawingSurface, ThemeOverride};

use super::{ChartEngine, ChartEvent};

/// Layered theme: default palette, then host override, then local override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeController {
    host: ThemeOverride,
    local: ThemeOverride,
    effective: ChartTheme,
}

impl ThemeController {
    #[must_use]
    pub fn new(host: ThemeOverride) -> Self {
        let mut controller = Self {
            host,
            local: ThemeOverride::default(),
            effective: ChartTheme::default(),
        };
        controller.recompute();
        controller
    }

    #[must_use]
    pub fn theme(&self) -> ChartTheme {
        self.effective
    }

    #[must_use]
    pub fn host_override(&self) -> ThemeOverride {
        self.host
    }

    #[must_use]
    pub fn local_override(&self) -> ThemeOverride {
        self.local
    }

    pub fn set_host_override(&mut self, host: ThemeOverride) -> ChartResult<ChartTheme> {
        host.validate()?;
        self.host = host;
        Ok(self.recompute())
    }

    pub fn set_local_override(&mut self, local: ThemeOverride) -> ChartResult<ChartTheme> {
        local.validate()?;
        self.local = local;
        Ok(self.recompute())
    }

    /// Drops the local layer. Returns the new theme when a layer was present.
    pub fn clear_local_override(&mut self) -> Option<ChartTheme> {
        if self.local.is_empty() {
            return None;
        }
        self.local = ThemeOverride::default();
        Some(self.recompute())
    }

    fn recompute(&mut self) -> ChartTheme {
        self.effective = self.local.apply(self.host.apply(ChartTheme::default()));
        debug!(
            host_layer = !self.host.is_empty(),
            local_layer = !self.local.is_empty(),
            background = %self.effective.background,
            "theme recomputed"
        );
        self.effective
    }
}

impl<S: DrawingSurface> ChartEngine<S> {
    /// Effective theme after both override layers.
    #[must_use]
    pub fn theme(&self) -> ChartTheme {
        self.theme.theme()
    }

    #[must_use]
    pub fn theme_override(&self) -> ThemeOverride {
        self.theme.local_override()
    }

    /// Replaces the host layer (the wholesale theme passed at construction).
    pub fn set_host_theme(&mut self, host: ThemeOverride) -> ChartResult<ChartTheme> {
        let theme = self.theme.set_host_override(host)?;
        self.emit(ChartEvent::ThemeChanged(theme));
        Ok(theme)
    }

    /// Applies a local preference layer over the host theme.
    pub fn set_theme_override(&mut self, local: ThemeOverride) -> ChartResult<ChartTheme> {
        let theme = self.theme.set_local_override(local)?;
        self.emit(ChartEvent::ThemeChanged(theme));
        Ok(theme)
    }

    /// Removes the local layer. Returns `false` when none was set.
    pub fn clear_theme_override(&mut self) -> bool {
        let Some(theme) = self.theme.clear_local_override() else {
            return false;
        };
        self.emit(ChartEvent::ThemeChanged(theme));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    #[test]
    fn local_layer_wins_over_host_layer() {
        let host_red = Color::rgb(1.0, 0.0, 0.0);
        let local_blue = Color::rgb(0.0, 0.0, 1.0);
        let mut controller = ThemeController::new(ThemeOverride {
            background: Some(host_red),
            axis_text: Some(host_red),
            ..ThemeOverride::default()
        });

        let theme = controller
            .set_local_override(ThemeOverride {
                background: Some(local_blue),
                ..ThemeOverride::default()
            })
            .expect("valid override");

        assert_eq!(theme.background, local_blue);
        assert_eq!(theme.axis_text, host_red);
        assert_eq!(theme.grid_line, ChartTheme::default().grid_line);
    }

    #[test]
    fn clearing_empty_local_layer_is_noop() {
        let mut controller = ThemeController::new(ThemeOverride::default());
        assert!(controller.clear_local_override().is_none());
    }
}
