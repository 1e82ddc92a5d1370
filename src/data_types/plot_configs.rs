/// Layout constants for the price-bar plot, in chart units.
#[derive(Clone, Debug, PartialEq)]
pub struct TickPlotConfig {
    /// Horizontal distance between adjacent bar slots.
    pub spacing: f32,
    /// Width of the high/low tick rectangle, centered on its slot.
    pub tick_width: f32,
    /// Visual exaggeration applied to the high-low pixel span.
    pub tick_height_factor: f32,
    /// Vertical offset of the time labels below the baseline.
    pub label_offset: f32,
    /// Upper bound on the label font size.
    pub label_base_size: f32,
    /// Space reserved below the baseline.
    pub bottom_inset: f32,
}

impl Default for TickPlotConfig {
    fn default() -> Self {
        Self {
            spacing: 40.0,
            tick_width: 8.0,
            tick_height_factor: 8.0,
            label_offset: 20.0,
            label_base_size: 12.0,
            bottom_inset: 40.0,
        }
    }
}
