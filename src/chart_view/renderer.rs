use crate::data_types::{BarDataset, ChartGeometry, TickPlotConfig, Viewport};
use crate::scales::PriceScale;
use crate::theme::ChartTheme;
use crate::transform::ViewTransform;
use crate::utils::{date_formatter, PixelsExt};
use chrono::Local;
use gpui::*;

/// Font size for the time labels in chart units; shrinks with the zoom so
/// labels in adjacent slots never collide.
pub fn label_font_size(base_size: f32, spacing: f32, scale: f32) -> f32 {
    base_size.min(spacing * scale)
}

/// Tick rectangle for one bar in chart space: `(x, top, width, height)`.
///
/// The high-low pixel span is exaggerated by the config's height factor, the
/// rectangle is kept above `bottom_limit`, and the result is normalized to a
/// non-negative height.
pub fn tick_rect(
    slot_x: f32,
    scaled_low: f32,
    scaled_high: f32,
    config: &TickPlotConfig,
    bottom_limit: f32,
) -> (f32, f32, f32, f32) {
    let mut height = (scaled_high - scaled_low) * config.tick_height_factor;
    if scaled_low + height > bottom_limit {
        height = bottom_limit - scaled_low;
    }
    let top = scaled_low.min(scaled_low + height);
    (
        slot_x - config.tick_width / 2.0,
        top,
        config.tick_width,
        height.abs(),
    )
}

/// Fully repaints the chart: bars, then time labels, then the baseline.
/// Later passes may overlap earlier ones; the order is the contract.
pub fn paint_chart(
    dataset: &BarDataset,
    viewport: Viewport,
    config: &TickPlotConfig,
    theme: &ChartTheme,
    bounds: Bounds<Pixels>,
    window: &mut Window,
    cx: &mut App,
) {
    let geometry = ChartGeometry::for_surface(
        bounds.size.width.as_f32(),
        bounds.size.height.as_f32(),
        config,
        dataset.len(),
    );
    let transform = ViewTransform::new(viewport, bounds.origin);

    paint_bars(dataset, &geometry, config, theme, &transform, window);
    paint_labels(
        dataset, &geometry, config, theme, &transform, bounds, window, cx,
    );
    paint_baseline(dataset, &geometry, theme, &transform, window);
}

fn paint_bars(
    dataset: &BarDataset,
    geometry: &ChartGeometry,
    config: &TickPlotConfig,
    theme: &ChartTheme,
    transform: &ViewTransform,
    window: &mut Window,
) {
    let (min_value, max_value) = dataset.price_bounds();
    let scale = PriceScale::new(
        min_value,
        max_value,
        geometry.price_pixel_origin(),
        geometry.price_pixel_range(),
    );
    let bottom_limit = geometry.height - config.bottom_inset;

    for (index, bar) in dataset.bars.iter().enumerate() {
        let x = geometry.slot_x(index);
        let scaled_low = scale.map(bar.low);
        let scaled_high = scale.map(bar.high);

        // Vertical guide line through the slot.
        let mut builder = PathBuilder::stroke(transform.scale_len(1.0));
        builder.move_to(transform.chart_to_screen(Point::new(x, geometry.start_y)));
        builder.line_to(transform.chart_to_screen(Point::new(x, geometry.height - geometry.start_y)));
        if let Ok(path) = builder.build() {
            window.paint_path(path, theme.guide_line);
        }

        let (rect_x, rect_top, rect_w, rect_h) =
            tick_rect(x, scaled_low, scaled_high, config, bottom_limit);
        let rect = Bounds::new(
            transform.chart_to_screen(Point::new(rect_x, rect_top)),
            Size::new(transform.scale_len(rect_w), transform.scale_len(rect_h)),
        );
        window.paint_quad(fill(rect, theme.tick_fill));
    }
}

#[allow(clippy::too_many_arguments)]
fn paint_labels(
    dataset: &BarDataset,
    geometry: &ChartGeometry,
    config: &TickPlotConfig,
    theme: &ChartTheme,
    transform: &ViewTransform,
    bounds: Bounds<Pixels>,
    window: &mut Window,
    cx: &mut App,
) {
    let chart_font = label_font_size(config.label_base_size, config.spacing, transform.viewport.scale);
    // Labels live in chart units like every other primitive, so the
    // on-screen size carries the viewport scale as well.
    let font_size = transform.scale_len(chart_font);
    let font = TextStyle::default().font();
    let label_y = geometry.start_y + config.label_offset;

    for (index, bar) in dataset.bars.iter().enumerate() {
        let text = date_formatter::time_label(dataset.chunk_start, bar.time, &Local);
        let run = TextRun {
            len: text.len(),
            font: font.clone(),
            color: theme.label_color,
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let Ok(lines) =
            window
                .text_system()
                .shape_text(text.into(), font_size, &[run], None, None)
        else {
            continue;
        };
        let origin = transform.chart_to_screen(Point::new(geometry.slot_x(index), label_y));
        for line in lines {
            let _ = line.paint(origin, font_size, TextAlign::Left, Some(bounds), window, cx);
        }
    }
}

fn paint_baseline(
    dataset: &BarDataset,
    geometry: &ChartGeometry,
    theme: &ChartTheme,
    transform: &ViewTransform,
    window: &mut Window,
) {
    let total_width = geometry.start_x + geometry.spacing * dataset.len() as f32;

    let mut builder = PathBuilder::stroke(transform.scale_len(1.0));
    builder.move_to(transform.chart_to_screen(Point::new(geometry.start_x, geometry.start_y)));
    builder.line_to(transform.chart_to_screen(Point::new(total_width, geometry.start_y)));
    if let Ok(path) = builder.build() {
        window.paint_path(path, theme.baseline);
    }
}
