use crate::core::types::{Dimensions, Viewport};

/// Bidirectional mapping between data space and pixel space for one frame.
///
/// Built fresh from the current viewport and region size; it captures six
/// numbers and is never cached across frames. Degenerate spans and sizes
/// fall back to constants instead of dividing by zero:
/// - zero time/price span maps every value to the region midpoint
/// - zero width/height maps every pixel back to the range minimum
///
/// The Y axis is inverted so higher prices land closer to the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    time_min: f64,
    time_span: f64,
    price_min: f64,
    price_span: f64,
    width: f64,
    height: f64,
}

impl Scale {
    #[must_use]
    pub fn new(viewport: Viewport, dimensions: Dimensions) -> Self {
        Self {
            time_min: viewport.time_min(),
            time_span: viewport.time_span(),
            price_min: viewport.price_min(),
            price_span: viewport.price_span(),
            width: dimensions.width,
            height: dimensions.height,
        }
    }

    #[must_use]
    pub fn dimensions(self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    #[must_use]
    pub fn x_to_pixel(self, time: f64) -> f64 {
        if self.time_span == 0.0 {
            return self.width / 2.0;
        }
        (time - self.time_min) / self.time_span * self.width
    }

    #[must_use]
    pub fn y_to_pixel(self, price: f64) -> f64 {
        if self.price_span == 0.0 {
            return self.height / 2.0;
        }
        self.height - (price - self.price_min) / self.price_span * self.height
    }

    #[must_use]
    pub fn pixel_to_x(self, x: f64) -> f64 {
        if self.width == 0.0 {
            return self.time_min;
        }
        self.time_min + x / self.width * self.time_span
    }

    #[must_use]
    pub fn pixel_to_y(self, y: f64) -> f64 {
        if self.height == 0.0 {
            return self.price_min;
        }
        self.price_min + (self.height - y) / self.height * self.price_span
    }
}
