use crate::data_types::{DragState, Viewport};

/// Scale change applied by one wheel step.
pub const ZOOM_STEP: f32 = 0.1;

/// ViewController handles the business logic of interactions (drag-pan and
/// zoom-at-pointer) independently of the GPUI infrastructure to facilitate
/// testing.
pub struct ViewController;

impl ViewController {
    /// Arms the drag state with the press position, relative to the surface.
    pub fn begin_drag(drag: &mut DragState, x: f32, y: f32) {
        drag.active = true;
        drag.anchor_x = x;
        drag.anchor_y = y;
    }

    /// Pans by the delta since the last anchor and re-anchors, so deltas stay
    /// incremental rather than cumulative from the press. Returns whether the
    /// viewport changed and a repaint is due.
    pub fn drag_to(viewport: &mut Viewport, drag: &mut DragState, x: f32, y: f32) -> bool {
        if !drag.active {
            return false;
        }
        viewport.translate_x += x - drag.anchor_x;
        viewport.translate_y += y - drag.anchor_y;
        drag.anchor_x = x;
        drag.anchor_y = y;
        true
    }

    /// Disarms the drag state. Safe to call while already idle.
    pub fn end_drag(drag: &mut DragState) {
        drag.active = false;
    }

    /// One zoom step anchored at the pointer position `(x, y)`, relative to
    /// the surface. `delta_y` follows wheel semantics: negative zooms in.
    ///
    /// The chart-space point under the pointer stays fixed across the step.
    /// When the clamp leaves the scale unchanged the factor is 1 and the
    /// translation is untouched, so the view never drifts at the zoom bounds.
    pub fn zoom_at(viewport: &mut Viewport, x: f32, y: f32, delta_y: f32) {
        let step = if delta_y < 0.0 { ZOOM_STEP } else { -ZOOM_STEP };
        let new_scale = Viewport::clamp_scale(viewport.scale + step);
        let factor = new_scale / viewport.scale;

        viewport.translate_x = x - factor * (x - viewport.translate_x);
        viewport.translate_y = y - factor * (y - viewport.translate_y);
        viewport.scale = new_scale;
    }
}
