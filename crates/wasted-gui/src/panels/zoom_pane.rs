use wasted_core::geometry::{Rect, Vec2, ViewportSize};
use wasted_core::viewport::{ImageViewport, PointerId, PointerResponse, Transform};

/// egui reports a single mouse pointer.
const MOUSE: PointerId = PointerId(0);

/// Interactive image pane: wheel zoom, double-click toggle and drag-to-pan,
/// all routed through the viewport controller.
pub fn show(
    ui: &mut egui::Ui,
    viewport: &mut ImageViewport,
    texture: Option<&egui::TextureHandle>,
    size: egui::Vec2,
) {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
    paint_background(ui, rect);

    let view = to_core_rect(rect);
    viewport.resize(view.size);

    handle_wheel(ui, &response, viewport);
    handle_drag(ui, &response, viewport, view.size);
    if response.double_clicked() {
        viewport.toggle_zoom();
    }
    update_cursor(ui, &response, viewport);

    match texture {
        Some(texture) => draw_image(ui, &response, viewport.transform(), texture, rect),
        None => show_placeholder(ui, rect),
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn handle_wheel(ui: &egui::Ui, response: &egui::Response, viewport: &mut ImageViewport) {
    let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }
    // egui scrolls positive upward; wheel deltas grow downward.
    viewport.wheel(-f64::from(scroll_delta));
}

fn handle_drag(
    ui: &egui::Ui,
    response: &egui::Response,
    viewport: &mut ImageViewport,
    size: ViewportSize,
) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = origin {
            log_pointer(viewport.pointer_down(MOUSE, to_core_pos(pos)));
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            viewport.pointer_move(MOUSE, to_core_pos(pos), size);
        }
    } else if response.drag_stopped() {
        log_pointer(viewport.pointer_up(MOUSE));
    } else if viewport.is_dragging() {
        // Drag ended without a release reaching this pane.
        log_pointer(viewport.pointer_cancel(MOUSE));
    }
}

fn log_pointer(response: PointerResponse) {
    if !matches!(response, PointerResponse::Panned) {
        tracing::trace!(?response, "Pointer");
    }
}

fn update_cursor(ui: &egui::Ui, response: &egui::Response, viewport: &ImageViewport) {
    if viewport.is_dragging() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if response.hovered() && viewport.scale() > 1.0 {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }
}

fn draw_image(
    ui: &egui::Ui,
    response: &egui::Response,
    target: Transform,
    texture: &egui::TextureHandle,
    rect: egui::Rect,
) {
    // Ease toward the target transform; snaps while dragging.
    let secs = target.transition.map_or(0.0, |d| d.as_secs_f32());
    let ctx = ui.ctx();
    let scale = ctx.animate_value_with_time(response.id.with("scale"), target.scale as f32, secs);
    let x = ctx.animate_value_with_time(response.id.with("x"), target.offset.x as f32, secs);
    let y = ctx.animate_value_with_time(response.id.with("y"), target.offset.y as f32, secs);
    let shown = Transform {
        scale: f64::from(scale),
        offset: Vec2::new(f64::from(x), f64::from(y)),
        transition: None,
    };

    let tex_size = texture.size_vec2();
    let img = shown.apply(
        to_core_rect(rect),
        ViewportSize::new(f64::from(tex_size.x), f64::from(tex_size.y)),
    );
    ui.painter_at(rect).image(
        texture.id(),
        to_egui_rect(img),
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Loading image...",
        egui::FontId::proportional(16.0),
        egui::Color32::from_gray(100),
    );
}

fn to_core_pos(pos: egui::Pos2) -> Vec2 {
    Vec2::new(f64::from(pos.x), f64::from(pos.y))
}

fn to_core_rect(rect: egui::Rect) -> Rect {
    Rect {
        min: to_core_pos(rect.min),
        size: ViewportSize::new(f64::from(rect.width()), f64::from(rect.height())),
    }
}

fn to_egui_rect(rect: Rect) -> egui::Rect {
    let max = rect.max();
    egui::Rect::from_min_max(
        egui::pos2(rect.min.x as f32, rect.min.y as f32),
        egui::pos2(max.x as f32, max.y as f32),
    )
}
