//! Transform helper for coordinate projection

use crate::data_types::Viewport;
use crate::utils::PixelsExt;
use gpui::*;

/// Projects chart-space coordinates through the viewport's translate and
/// scale into absolute window pixels, and back.
#[derive(Clone, Copy)]
pub struct ViewTransform {
    pub viewport: Viewport,
    /// Surface origin in window space.
    pub origin: Point<Pixels>,
}

impl ViewTransform {
    pub fn new(viewport: Viewport, origin: Point<Pixels>) -> Self {
        Self { viewport, origin }
    }

    pub fn chart_to_screen(&self, point: Point<f32>) -> Point<Pixels> {
        Point::new(
            self.origin.x + px(self.viewport.translate_x + point.x * self.viewport.scale),
            self.origin.y + px(self.viewport.translate_y + point.y * self.viewport.scale),
        )
    }

    pub fn screen_to_chart(&self, point: Point<Pixels>) -> Point<f32> {
        Point::new(
            ((point.x - self.origin.x).as_f32() - self.viewport.translate_x) / self.viewport.scale,
            ((point.y - self.origin.y).as_f32() - self.viewport.translate_y) / self.viewport.scale,
        )
    }

    /// Scales a chart-space length to screen pixels.
    pub fn scale_len(&self, len: f32) -> Pixels {
        px(len * self.viewport.scale)
    }
}
