use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;

use crate::core::Dimensions;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, TextBaseline, TextHAlign};

const DEFAULT_FONT_PX: f64 = 10.0;
const DEFAULT_FONT_FAMILY: &str = "Sans";

/// Cairo + Pango + PangoCairo implementation of [`DrawingSurface`].
///
/// Two modes:
/// - offscreen: owns an ARGB32 image surface that is recreated on resize
/// - borrowed: draws on an external context (for example a GTK
///   `DrawingArea` callback), where the host owns the backing store
///
/// Cairo drawing errors are latched and reported by [`DrawingSurface::finish`].
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    device_pixel_ratio: f64,
    fill_color: Color,
    stroke_color: Color,
    font: FontDescription,
    align: TextHAlign,
    baseline: TextBaseline,
    pending_error: Option<ChartError>,
}

impl CairoSurface {
    /// Offscreen surface with an initial logical size.
    pub fn offscreen(width: i32, height: i32, device_pixel_ratio: f64) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::DegenerateDimension {
                width: f64::from(width),
                height: f64::from(height),
            });
        }
        let image = create_image(width, height)?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self::with_context(context, Some(image), device_pixel_ratio))
    }

    /// Wraps a context owned by the host toolkit.
    #[must_use]
    pub fn from_context(context: Context, device_pixel_ratio: f64) -> Self {
        Self::with_context(context, None, device_pixel_ratio)
    }

    fn with_context(context: Context, image: Option<ImageSurface>, ratio: f64) -> Self {
        let mut font = FontDescription::new();
        font.set_family(DEFAULT_FONT_FAMILY);
        font.set_absolute_size(DEFAULT_FONT_PX * f64::from(pango::SCALE));
        Self {
            context,
            image,
            device_pixel_ratio: ratio,
            fill_color: Color::rgb(0.0, 0.0, 0.0),
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            font,
            align: TextHAlign::Left,
            baseline: TextBaseline::Alphabetic,
            pending_error: None,
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Backing image for offscreen surfaces.
    #[must_use]
    pub fn image_surface(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    fn latch(&mut self, what: &str, result: Result<(), cairo::Error>) {
        if let Err(err) = result {
            self.pending_error
                .get_or_insert_with(|| map_backend_error(what, err));
        }
    }
}

impl DrawingSurface for CairoSurface {
    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn resize(&mut self, physical_width: u32, physical_height: u32, _logical: Dimensions) {
        if self.image.is_some() {
            let width = i32::try_from(physical_width.max(1)).unwrap_or(i32::MAX);
            let height = i32::try_from(physical_height.max(1)).unwrap_or(i32::MAX);
            let rebuilt = create_image(width, height).and_then(|image| {
                Context::new(&image)
                    .map(|context| (image, context))
                    .map_err(|err| map_backend_error("failed to create cairo context", err))
            });
            match rebuilt {
                Ok((image, context)) => {
                    self.image = Some(image);
                    self.context = context;
                }
                Err(err) => {
                    self.pending_error.get_or_insert(err);
                }
            }
        }
        self.context.identity_matrix();
        self.context.set_dash(&[], 0.0);
    }

    fn set_scale(&mut self, ratio: f64) {
        self.context.identity_matrix();
        self.context.scale(ratio, ratio);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let result = self.context.save().and_then(|()| {
            self.context.set_operator(Operator::Clear);
            self.context.rectangle(x, y, width, height);
            let filled = self.context.fill();
            self.context.restore().and(filled)
        });
        self.latch("failed to clear rectangle", result);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        apply_color(&self.context, self.fill_color);
        self.context.rectangle(x, y, width, height);
        let result = self.context.fill();
        self.latch("failed to fill rectangle", result);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.context.set_dash(segments, 0.0);
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn stroke(&mut self) {
        apply_color(&self.context, self.stroke_color);
        let result = self.context.stroke();
        self.latch("failed to stroke path", result);
    }

    fn set_font(&mut self, font: &str) {
        self.font = parse_css_font(font);
    }

    fn set_text_align(&mut self, align: TextHAlign) {
        self.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&self.font));
        layout.set_text(text);

        let (text_width, text_height) = layout.pixel_size();
        let left = match self.align {
            TextHAlign::Left => x,
            TextHAlign::Center => x - f64::from(text_width) / 2.0,
            TextHAlign::Right => x - f64::from(text_width),
        };
        let top = match self.baseline {
            TextBaseline::Top => y,
            TextBaseline::Middle => y - f64::from(text_height) / 2.0,
            TextBaseline::Alphabetic => {
                y - f64::from(layout.baseline()) / f64::from(pango::SCALE)
            }
        };

        apply_color(&self.context, self.fill_color);
        self.context.move_to(left, top);
        pangocairo::functions::show_layout(&self.context, &layout);
    }

    fn finish(&mut self) -> ChartResult<()> {
        if let Some(err) = self.pending_error.take() {
            return Err(err);
        }
        self.context
            .status()
            .map_err(|err| map_backend_error("cairo context in error state", err))?;
        if let Some(image) = &self.image {
            image.flush();
        }
        Ok(())
    }
}

/// Converts `"<size>px <family>"` into a Pango description.
///
/// Unparseable input falls back to the default size with the whole string as family.
fn parse_css_font(font: &str) -> FontDescription {
    let mut description = FontDescription::new();
    let trimmed = font.trim();
    let (size, family) = trimmed
        .split_once(' ')
        .and_then(|(head, tail)| {
            head.strip_suffix("px")
                .and_then(|value| value.parse::<f64>().ok())
                .filter(|value| value.is_finite() && *value > 0.0)
                .map(|value| (value, tail.trim()))
        })
        .unwrap_or((DEFAULT_FONT_PX, trimmed));

    let family = if family.is_empty() {
        DEFAULT_FONT_FAMILY
    } else {
        family
    };
    description.set_family(family);
    description.set_absolute_size(size * f64::from(pango::SCALE));
    description
}

fn create_image(width: i32, height: i32) -> ChartResult<ImageSurface> {
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::SurfaceUnavailable(format!("{prefix}: {err}"))
}
