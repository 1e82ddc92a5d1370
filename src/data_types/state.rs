use crate::data_types::TickPlotConfig;

/// Scale and translation applied to chart content before drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Viewport {
    pub const MIN_SCALE: f32 = 0.15;
    pub const MAX_SCALE: f32 = 1.0;

    /// Clamps a requested scale to the allowed zoom bounds.
    pub fn clamp_scale(scale: f32) -> f32 {
        scale.clamp(Self::MIN_SCALE, Self::MAX_SCALE)
    }
}

impl Default for Viewport {
    /// Initial view: zoomed out a step, panned right so the newest bars are
    /// on screen.
    fn default() -> Self {
        Self {
            scale: 0.7,
            translate_x: 800.0,
            translate_y: 20.0,
        }
    }
}

/// Local interaction state of an in-progress drag. The anchor is the last
/// pointer position, relative to the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub anchor_x: f32,
    pub anchor_y: f32,
}

/// Chart origin and slot layout in unscaled, untranslated space, rebuilt
/// from the surface size on every paint (which is how host resizes take
/// effect).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub width: f32,
    pub height: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub spacing: f32,
}

impl ChartGeometry {
    /// Lays the chart out for a surface, right-aligning the last bar slot to
    /// the surface edge.
    pub fn for_surface(width: f32, height: f32, config: &TickPlotConfig, bar_count: usize) -> Self {
        Self {
            width,
            height,
            start_x: width - config.spacing * bar_count as f32,
            start_y: height - config.bottom_inset,
            spacing: config.spacing,
        }
    }

    /// Horizontal slot position for a bar index.
    pub fn slot_x(&self, index: usize) -> f32 {
        self.start_x + self.spacing * index as f32
    }

    /// Pixel origin of the price scale.
    pub fn price_pixel_origin(&self) -> f32 {
        self.start_y
    }

    /// Pixel-range size of the price scale.
    pub fn price_pixel_range(&self) -> f32 {
        self.height - self.start_y
    }
}
