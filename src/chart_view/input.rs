use super::ChartView;
use crate::utils::PixelsExt;
use crate::view_controller::ViewController;
use gpui::*;
use tracing::trace;

impl ChartView {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        let bounds = *self.bounds.borrow();
        if !bounds.contains(&event.position) {
            return;
        }
        let local = event.position - bounds.origin;
        ViewController::begin_drag(&mut self.drag, local.x.as_f32(), local.y.as_f32());
    }

    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // A release outside the surface produces no mouse-up here; recover
        // from the reported button state so the drag cannot stay stuck.
        if self.drag.active && event.pressed_button != Some(MouseButton::Left) {
            ViewController::end_drag(&mut self.drag);
            return;
        }

        let origin = self.bounds.borrow().origin;
        let local = event.position - origin;
        if ViewController::drag_to(
            &mut self.viewport,
            &mut self.drag,
            local.x.as_f32(),
            local.y.as_f32(),
        ) {
            self.draw_chart(cx);
        }
    }

    pub fn handle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        ViewController::end_drag(&mut self.drag);
    }

    pub fn handle_scroll_wheel(
        &mut self,
        event: &ScrollWheelEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // Scroll deltas arrive with scroll-up positive; the zoom math wants
        // wheel semantics where negative means zoom in.
        let delta_y = match event.delta {
            ScrollDelta::Pixels(p) => -p.y.as_f32(),
            ScrollDelta::Lines(l) => -l.y * 20.0,
        };
        // A purely horizontal scroll is not a zoom request.
        if delta_y == 0.0 {
            return;
        }

        let origin = self.bounds.borrow().origin;
        let local = event.position - origin;
        ViewController::zoom_at(
            &mut self.viewport,
            local.x.as_f32(),
            local.y.as_f32(),
            delta_y,
        );
        trace!(scale = self.viewport.scale, "zoom step");
        self.draw_chart(cx);
    }
}
