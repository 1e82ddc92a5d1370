use gpui_tickchart::chart_view::renderer::{label_font_size, tick_rect};
use gpui_tickchart::{ChartGeometry, PriceScale, TickPlotConfig};

#[test]
fn test_slots_advance_by_fixed_spacing() {
    let config = TickPlotConfig::default();
    let geometry = ChartGeometry::for_surface(1280.0, 600.0, &config, 12);

    for i in 0..11 {
        assert_eq!(geometry.slot_x(i + 1) - geometry.slot_x(i), config.spacing);
    }
}

#[test]
fn test_last_slot_right_aligned_to_surface_edge() {
    let config = TickPlotConfig::default();
    let geometry = ChartGeometry::for_surface(1280.0, 600.0, &config, 12);

    // One spacing past the last bar's slot is the right edge.
    assert_eq!(geometry.slot_x(12), 1280.0);
    assert_eq!(geometry.start_y, 560.0);
    assert_eq!(geometry.price_pixel_range(), 40.0);
}

#[test]
fn test_label_font_size_shrinks_with_zoom() {
    // Wide slots at scale 0.7 keep the base size.
    assert_eq!(label_font_size(12.0, 40.0, 0.7), 12.0);
    // Fully zoomed out, the slot width wins.
    assert!((label_font_size(12.0, 40.0, 0.15) - 6.0).abs() < 1e-4);
}

#[test]
fn test_tick_rect_exaggerates_high_low_span() {
    let config = TickPlotConfig::default();
    // High sits 5px above low; the factor of 8 stretches that to 40px.
    let (x, top, width, height) = tick_rect(400.0, 540.0, 535.0, &config, 560.0);

    assert_eq!(x, 396.0);
    assert_eq!(width, 8.0);
    assert_eq!(top, 500.0);
    assert_eq!(height, 40.0);
}

#[test]
fn test_tick_rect_clamped_at_bottom_inset() {
    let config = TickPlotConfig::default();
    // Inverted inputs grow the rectangle downward; it must stop at the inset.
    let (_, top, _, height) = tick_rect(400.0, 550.0, 555.0, &config, 560.0);

    assert_eq!(top, 550.0);
    assert_eq!(height, 10.0);
}

#[test]
fn test_two_bar_scenario_orders_highs() {
    let config = TickPlotConfig::default();
    let geometry = ChartGeometry::for_surface(800.0, 600.0, &config, 2);
    let scale = PriceScale::new(
        90.0,
        120.0,
        geometry.price_pixel_origin(),
        geometry.price_pixel_range(),
    );

    // Bar 1's high (120) paints strictly above bar 0's (110).
    assert!(scale.map(120.0) < scale.map(110.0));
}

#[test]
fn test_layout_is_deterministic() {
    let config = TickPlotConfig::default();

    let a = tick_rect(400.0, 540.0, 520.0, &config, 560.0);
    let b = tick_rect(400.0, 540.0, 520.0, &config, 560.0);
    assert_eq!(a, b);

    let g1 = ChartGeometry::for_surface(800.0, 600.0, &config, 5);
    let g2 = ChartGeometry::for_surface(800.0, 600.0, &config, 5);
    assert_eq!(g1, g2);
}
