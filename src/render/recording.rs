use smallvec::SmallVec;

use crate::core::Dimensions;
use crate::render::{Color, DrawingSurface, TextBaseline, TextHAlign};

/// Dash pattern as recorded; crosshair patterns fit inline.
pub type DashPattern = SmallVec<[f64; 4]>;

/// Filled rectangle with the fill color active at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

/// Stroked segment with the stroke state active at stroke time.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    pub color: Color,
    pub dash: DashPattern,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedText {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: String,
    pub color: Color,
    pub align: TextHAlign,
    pub baseline: TextBaseline,
}

/// Headless surface used by tests and non-visual hosts.
///
/// Resolves the canvas-style state machine into flat records (rects,
/// stroked segments, texts). A resize discards previous records, so after
/// a render pass the surface holds exactly the last frame.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    device_pixel_ratio: f64,
    physical_size: (u32, u32),
    logical_size: Option<Dimensions>,
    scale: f64,
    clear_count: usize,
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
    dash: DashPattern,
    font: String,
    align: TextHAlign,
    baseline: TextBaseline,
    path: Vec<(f64, f64, bool)>,
    rects: Vec<RecordedRect>,
    lines: Vec<RecordedLine>,
    texts: Vec<RecordedText>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::with_pixel_ratio(1.0)
    }
}

impl RecordingSurface {
    #[must_use]
    pub fn with_pixel_ratio(device_pixel_ratio: f64) -> Self {
        Self {
            device_pixel_ratio,
            physical_size: (0, 0),
            logical_size: None,
            scale: 1.0,
            clear_count: 0,
            fill_color: Color::rgb(0.0, 0.0, 0.0),
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            line_width: 1.0,
            dash: DashPattern::new(),
            font: "10px sans-serif".to_owned(),
            align: TextHAlign::Left,
            baseline: TextBaseline::Alphabetic,
            path: Vec::new(),
            rects: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn physical_size(&self) -> (u32, u32) {
        self.physical_size
    }

    #[must_use]
    pub fn logical_size(&self) -> Option<Dimensions> {
        self.logical_size
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Number of `clear_rect` calls since the last resize.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    #[must_use]
    pub fn rects(&self) -> &[RecordedRect] {
        &self.rects
    }

    #[must_use]
    pub fn lines(&self) -> &[RecordedLine] {
        &self.lines
    }

    #[must_use]
    pub fn texts(&self) -> &[RecordedText] {
        &self.texts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }

    fn reset_records(&mut self) {
        self.clear_count = 0;
        self.path.clear();
        self.rects.clear();
        self.lines.clear();
        self.texts.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn resize(&mut self, physical_width: u32, physical_height: u32, logical: Dimensions) {
        self.physical_size = (physical_width, physical_height);
        self.logical_size = Some(logical);
        self.scale = 1.0;
        self.reset_records();
    }

    fn set_scale(&mut self, ratio: f64) {
        self.scale = ratio;
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.clear_count += 1;
        let covers_all = self.logical_size.is_some_and(|size| {
            x <= 0.0 && y <= 0.0 && x + width >= size.width && y + height >= size.height
        });
        if covers_all {
            self.rects.clear();
            self.lines.clear();
            self.texts.clear();
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.rects.push(RecordedRect {
            x,
            y,
            width,
            height,
            color: self.fill_color,
        });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.dash = segments.iter().copied().collect();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y, false));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y, true));
    }

    fn stroke(&mut self) {
        for pair in self.path.windows(2) {
            let (x1, y1, _) = pair[0];
            let (x2, y2, connected) = pair[1];
            if connected {
                self.lines.push(RecordedLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    width: self.line_width,
                    color: self.stroke_color,
                    dash: self.dash.clone(),
                });
            }
        }
    }

    fn set_font(&mut self, font: &str) {
        font.clone_into(&mut self.font);
    }

    fn set_text_align(&mut self, align: TextHAlign) {
        self.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.texts.push(RecordedText {
            text: text.to_owned(),
            x,
            y,
            font: self.font.clone(),
            color: self.fill_color,
            align: self.align,
            baseline: self.baseline,
        });
    }
}
