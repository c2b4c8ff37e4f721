use tracing::{error, warn};

use crate::core::Dimensions;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, TextBaseline, TextHAlign};

/// Immediate-mode 2D drawing context supplied by the host.
///
/// Mirrors the subset of an HTML-canvas-like API the painters need. All
/// coordinates are logical pixels once [`prepare_surface`] has applied the
/// device pixel ratio. Drawing calls are infallible; backends that can fail
/// report it from [`DrawingSurface::finish`] at the end of a pass.
pub trait DrawingSurface {
    /// Physical-to-logical pixel ratio of the display hosting this surface.
    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }

    /// Sets the backing-store resolution while keeping the logical display size.
    ///
    /// Like a canvas resize, this discards previous content and state.
    fn resize(&mut self, physical_width: u32, physical_height: u32, logical: Dimensions);

    /// Replaces the current transform with a uniform scale.
    fn set_scale(&mut self, ratio: f64);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    /// Alternating dash/gap lengths; an empty slice restores solid lines.
    fn set_line_dash(&mut self, segments: &[f64]);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextHAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Flushes the pass and surfaces any deferred backend error.
    fn finish(&mut self) -> ChartResult<()> {
        Ok(())
    }
}

/// Strokes one straight segment as its own path.
pub fn stroke_segment<S>(surface: &mut S, from: (f64, f64), to: (f64, f64))
where
    S: DrawingSurface + ?Sized,
{
    surface.begin_path();
    surface.move_to(from.0, from.1);
    surface.line_to(to.0, to.1);
    surface.stroke();
}

/// Sizes `surface` for `dimensions` at the host's device pixel ratio.
///
/// Returns `false` (and draws nothing) for zero, negative or non-finite
/// dimensions.
pub fn prepare_surface<S>(surface: &mut S, dimensions: Dimensions) -> bool
where
    S: DrawingSurface + ?Sized,
{
    if !dimensions.is_valid() {
        warn!(
            width = dimensions.width,
            height = dimensions.height,
            "skipping draw for degenerate dimensions"
        );
        return false;
    }

    let ratio = effective_pixel_ratio(surface.device_pixel_ratio());
    let physical_width = (dimensions.width * ratio).round() as u32;
    let physical_height = (dimensions.height * ratio).round() as u32;
    surface.resize(physical_width, physical_height, dimensions);
    surface.set_scale(ratio);
    true
}

fn effective_pixel_ratio(reported: f64) -> f64 {
    if reported.is_finite() && reported > 0.0 {
        reported
    } else {
        1.0
    }
}

/// One canvas region's surface, or the record that the host could not provide one.
///
/// Unavailability is logged once, either when the target is created or when
/// a pass reports the surface lost; every later draw on it is a silent no-op.
#[derive(Debug)]
pub struct RenderTarget<S> {
    name: &'static str,
    surface: Option<S>,
}

impl<S: DrawingSurface> RenderTarget<S> {
    #[must_use]
    pub fn new(name: &'static str, surface: S) -> Self {
        Self {
            name,
            surface: Some(surface),
        }
    }

    #[must_use]
    pub fn unavailable(name: &'static str) -> Self {
        let err = ChartError::SurfaceUnavailable(format!("no 2D context for `{name}`"));
        error!(error = %err, "surface disabled");
        Self {
            name,
            surface: None,
        }
    }

    #[must_use]
    pub fn from_option(name: &'static str, surface: Option<S>) -> Self {
        match surface {
            Some(surface) => Self::new(name, surface),
            None => Self::unavailable(name),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.surface.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Runs `paint` against the surface and finishes the pass.
    ///
    /// Returns `Ok(false)` when the surface is unavailable or `paint`
    /// declined to draw. A surface whose pass ends in
    /// [`ChartError::SurfaceUnavailable`] is dropped after logging once, so
    /// every later draw on this target is a no-op.
    pub fn draw<F>(&mut self, paint: F) -> ChartResult<bool>
    where
        F: FnOnce(&mut S) -> bool,
    {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(false);
        };
        let drew = paint(surface);
        match surface.finish() {
            Ok(()) => Ok(drew),
            Err(err @ ChartError::SurfaceUnavailable(_)) => {
                error!(region = self.name, error = %err, "surface lost, disabling");
                self.surface = None;
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    #[must_use]
    pub fn into_surface(self) -> Option<S> {
        self.surface
    }
}
