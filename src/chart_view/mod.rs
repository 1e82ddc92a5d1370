pub mod input;
pub mod renderer;

use crate::data_types::{BarDataset, DragState, TickPlotConfig, Viewport};
use crate::theme::ChartTheme;
use eyre::Result;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

/// The chart session: owns one chunk of bars and the viewport, wires pointer
/// input in its `Render` impl and repaints through a canvas element.
///
/// The hosting view embeds it, resizes it, and calls [`ChartView::draw_chart`]
/// / [`ChartView::clear_chart`]; everything else happens through pointer and
/// wheel input.
pub struct ChartView {
    dataset: Rc<BarDataset>,
    pub viewport: Viewport,
    pub(crate) drag: DragState,
    pub config: TickPlotConfig,
    pub theme: ChartTheme,
    cleared: bool,
    /// Canvas bounds from the last paint, shared with the input handlers.
    pub(crate) bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl ChartView {
    /// Builds a session for one chunk. Fails loudly on an empty dataset:
    /// there is nothing sensible to draw, and a blank chart would hide the
    /// error.
    pub fn new(dataset: BarDataset) -> Result<Self> {
        dataset.validate()?;
        info!(
            bars = dataset.len(),
            chunk_start = dataset.chunk_start,
            "chart session created"
        );
        Ok(Self {
            dataset: Rc::new(dataset),
            viewport: Viewport::default(),
            drag: DragState::default(),
            config: TickPlotConfig::default(),
            theme: ChartTheme::default(),
            cleared: false,
            bounds: Rc::new(RefCell::new(Bounds::default())),
        })
    }

    pub fn dataset(&self) -> &BarDataset {
        &self.dataset
    }

    /// Requests a full repaint with the current viewport. Also the call to
    /// make after the host resizes the surface.
    pub fn draw_chart(&mut self, cx: &mut Context<Self>) {
        self.cleared = false;
        cx.notify();
    }

    /// Wipes the surface; the next `draw_chart` brings the content back.
    /// Meant for host teardown.
    pub fn clear_chart(&mut self, cx: &mut Context<Self>) {
        debug!("chart cleared");
        self.cleared = true;
        cx.notify();
    }
}

impl Render for ChartView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let dataset = self.dataset.clone();
        let viewport = self.viewport;
        let config = self.config.clone();
        let theme = self.theme.clone();
        let cleared = self.cleared;
        let bounds_rc = self.bounds.clone();

        div()
            .id("tick-chart")
            .size_full()
            .bg(theme.background)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_scroll_wheel(cx.listener(Self::handle_scroll_wheel))
            .child(
                canvas(
                    |_, _, _| {},
                    move |bounds, (), window, cx| {
                        *bounds_rc.borrow_mut() = bounds;
                        if cleared {
                            return;
                        }
                        renderer::paint_chart(
                            &dataset, viewport, &config, &theme, bounds, window, cx,
                        );
                    },
                )
                .size_full(),
            )
    }
}
