use gpui::*;

#[derive(Clone, Debug)]
pub struct ChartTheme {
    pub background: Hsla,
    pub guide_line: Hsla,
    pub baseline: Hsla,
    pub tick_fill: Hsla,
    pub label_color: Hsla,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: gpui::white(),
            guide_line: gpui::black(),
            baseline: gpui::black(),
            tick_fill: gpui::blue(),
            label_color: gpui::black(),
        }
    }
}
