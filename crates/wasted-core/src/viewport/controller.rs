use tracing::debug;

use crate::catalog::{Product, Variant};
use crate::consts::{
    BUTTON_ZOOM_STEP, DOUBLE_CLICK_SCALE, MAX_SCALE, MIN_SCALE, SCALE_SNAP_EPSILON,
    TRANSFORM_TRANSITION, WHEEL_ZOOM_STEP,
};
use crate::geometry::{Vec2, ViewportSize};
use crate::variant::{self, Direction};

use super::pointer::{DragSession, PointerId, PointerResponse};
use super::transform::Transform;

/// Saturate a requested scale into `[MIN_SCALE, MAX_SCALE]`.
///
/// Values within `SCALE_SNAP_EPSILON` of the floor snap onto it and NaN is
/// treated as the floor.
pub fn clamp_scale(requested: f64) -> f64 {
    if requested.is_nan() {
        return MIN_SCALE;
    }
    let scale = requested.clamp(MIN_SCALE, MAX_SCALE);
    if scale - MIN_SCALE < SCALE_SNAP_EPSILON {
        MIN_SCALE
    } else {
        scale
    }
}

/// Zoom, pan and variant selection for the image pane of a product modal.
///
/// All operations are infallible: zoom requests saturate, drags at rest are
/// ignored and variant navigation without variants does nothing.
#[derive(Clone, Debug)]
pub struct ImageViewport {
    variants: Vec<Variant>,
    selected_image: String,
    scale: f64,
    offset: Vec2,
    drag: Option<DragSession>,
    /// Last known size of the drawing element, used to keep the offset in
    /// bounds when zooming out.
    viewport_size: Option<ViewportSize>,
}

impl ImageViewport {
    pub fn new(product: &Product) -> Self {
        Self {
            variants: product.colors.clone(),
            selected_image: product.initial_image().to_string(),
            scale: MIN_SCALE,
            offset: Vec2::ZERO,
            drag: None,
            viewport_size: None,
        }
    }

    pub fn selected_image(&self) -> &str {
        &self.selected_image
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Index of the selected variant, `-1` when the base image is shown.
    pub fn variant_index(&self) -> isize {
        variant::active_index(&self.variants, &self.selected_image)
    }

    pub fn transform(&self) -> Transform {
        Transform {
            scale: self.scale,
            offset: self.offset,
            transition: if self.is_dragging() {
                None
            } else {
                Some(TRANSFORM_TRANSITION)
            },
        }
    }

    fn at_rest(&self) -> bool {
        self.scale <= MIN_SCALE
    }

    // ---------------------------------------------------------------------
    // Zoom
    // ---------------------------------------------------------------------

    /// The single entry point for every zoom change.
    pub fn set_zoom(&mut self, requested: f64) {
        self.scale = clamp_scale(requested);
        if self.at_rest() {
            self.offset = Vec2::ZERO;
        } else if let Some(size) = self.viewport_size {
            self.offset = self.offset.clamp_symmetric(size.pan_bounds(self.scale));
        }
        debug!(scale = self.scale, "Zoom changed");
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.scale + BUTTON_ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.scale - BUTTON_ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.set_zoom(MIN_SCALE);
    }

    /// Double click: jump to 2x from rest, back to rest from anything else.
    pub fn toggle_zoom(&mut self) {
        let target = if self.at_rest() {
            DOUBLE_CLICK_SCALE
        } else {
            MIN_SCALE
        };
        self.set_zoom(target);
    }

    /// One wheel notch. Scrolling down (`delta_y > 0`) zooms out.
    pub fn wheel(&mut self, delta_y: f64) {
        let step = if delta_y > 0.0 {
            -WHEEL_ZOOM_STEP
        } else {
            WHEEL_ZOOM_STEP
        };
        self.set_zoom(self.scale + step);
    }

    /// Record the drawing element's size so zoom-outs can re-clamp the offset.
    pub fn resize(&mut self, size: ViewportSize) {
        self.viewport_size = Some(size);
        if !self.at_rest() {
            self.offset = self.offset.clamp_symmetric(size.pan_bounds(self.scale));
        }
    }

    // ---------------------------------------------------------------------
    // Drag-to-pan
    // ---------------------------------------------------------------------

    pub fn pointer_down(&mut self, pointer: PointerId, position: Vec2) -> PointerResponse {
        if self.at_rest() || self.drag.is_some() {
            return PointerResponse::Ignored;
        }
        self.drag = Some(DragSession {
            pointer,
            last: position,
        });
        debug!(pointer = pointer.0, "Drag started");
        PointerResponse::Capture(pointer)
    }

    /// Pan by the pointer's movement since the previous event, keeping the
    /// magnified image from exposing empty space inside `viewport`.
    pub fn pointer_move(
        &mut self,
        pointer: PointerId,
        position: Vec2,
        viewport: ViewportSize,
    ) -> PointerResponse {
        let at_rest = self.at_rest();
        let Some(drag) = self.drag.as_mut().filter(|d| d.pointer == pointer) else {
            return PointerResponse::Ignored;
        };
        if at_rest {
            return PointerResponse::Ignored;
        }

        let delta = position - drag.last;
        drag.last = position;
        self.viewport_size = Some(viewport);

        let bounds = viewport.pan_bounds(self.scale);
        self.offset = (self.offset + delta).clamp_symmetric(bounds);
        PointerResponse::Panned
    }

    pub fn pointer_up(&mut self, pointer: PointerId) -> PointerResponse {
        match self.drag {
            Some(d) if d.pointer == pointer => {
                self.drag = None;
                debug!(pointer = pointer.0, "Drag ended");
                PointerResponse::Release(pointer)
            }
            _ => PointerResponse::Ignored,
        }
    }

    /// Cancellation (e.g. the OS took the pointer) ends the drag like a release.
    pub fn pointer_cancel(&mut self, pointer: PointerId) -> PointerResponse {
        self.pointer_up(pointer)
    }

    // ---------------------------------------------------------------------
    // Variant selection
    // ---------------------------------------------------------------------

    /// Show `image_ref` and return to rest zoom. The reference is not checked
    /// against the product's own images.
    pub fn select_image(&mut self, image_ref: impl Into<String>) {
        self.selected_image = image_ref.into();
        self.scale = MIN_SCALE;
        self.offset = Vec2::ZERO;
        debug!(image = %self.selected_image, "Image selected");
    }

    /// Select the neighbouring variant. Returns the newly selected image, or
    /// `None` when the product has no variants.
    pub fn cycle_variant(&mut self, direction: Direction) -> Option<&str> {
        let next = variant::step(&self.variants, &self.selected_image, direction)?
            .image
            .clone();
        self.select_image(next);
        Some(&self.selected_image)
    }

    pub fn next_variant(&mut self) -> Option<&str> {
        self.cycle_variant(Direction::Next)
    }

    pub fn prev_variant(&mut self) -> Option<&str> {
        self.cycle_variant(Direction::Prev)
    }
}
