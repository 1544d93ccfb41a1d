use std::time::Instant;

use url::Url;
use wasted_core::consts::{MAX_SCALE, MIN_SCALE};
use wasted_core::modal::{KeyOutcome, ModalKey};
use wasted_core::viewer::ShirtViewer;
use wasted_core::viewport::ImageViewport;

use crate::app::WastedApp;
use crate::panels::helpers::{price_text, swatch_color};
use crate::panels::zoom_pane;
use crate::states::TextureSlot;

const IMAGE_PANE: f32 = 420.0;
const DETAILS_WIDTH: f32 = 300.0;
const SWATCH: f32 = 24.0;

/// Things the modal asks of the app once its borrow has ended.
enum Action {
    OpenViewer(Url),
}

pub fn show(ctx: &egui::Context, app: &mut WastedApp) {
    let now = Instant::now();
    let Some(modal) = app.modal.as_mut() else {
        return;
    };

    let keys = ctx.input(|i| {
        [
            (egui::Key::Escape, ModalKey::Escape),
            (egui::Key::ArrowLeft, ModalKey::ArrowLeft),
            (egui::Key::ArrowRight, ModalKey::ArrowRight),
        ]
        .into_iter()
        .filter(|(key, _)| i.key_pressed(*key))
        .map(|(_, key)| key)
        .collect::<Vec<_>>()
    });
    for key in keys {
        if let KeyOutcome::VariantSelected(image) = modal.handle_key(key, now) {
            tracing::debug!(%image, "Variant selected from keyboard");
        }
    }

    let opacity = modal.opacity(now);
    let product = modal.product().clone();
    let id = egui::Id::new(("product_modal", product.id));
    let area = egui::Modal::default_area(id)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, modal.slide_offset(now)]);

    let mut action = None;
    let response = egui::Modal::new(id)
        .area(area)
        .backdrop_color(egui::Color32::from_black_alpha((opacity * 160.0) as u8))
        .show(ctx, |ui| {
            ui.set_opacity(opacity);

            ui.horizontal(|ui| {
                ui.heading(&product.name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").on_hover_text("Close").clicked() {
                        modal.request_close(now);
                    }
                });
            });
            ui.separator();

            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    let viewport = modal.viewport_mut();
                    let texture = match app.textures.slot(viewport.selected_image(), &app.cmd_tx) {
                        TextureSlot::Ready(t) => Some(t),
                        _ => None,
                    };
                    zoom_pane::show(ui, viewport, texture, egui::vec2(IMAGE_PANE, IMAGE_PANE));
                    zoom_toolbar(ui, viewport);
                });

                ui.separator();

                ui.vertical(|ui| {
                    ui.set_max_width(DETAILS_WIDTH);
                    ui.label(price_text(&product.price).size(18.0));
                    ui.add_space(4.0);
                    ui.label(&product.description);
                    ui.add_space(4.0);
                    ui.label(format!("Sizes: {}", product.sizes));
                    ui.label(egui::RichText::new(&product.verdict).italics());
                    ui.add_space(8.0);

                    let viewport = modal.viewport_mut();
                    if viewport.has_variants() {
                        variant_picker(ui, viewport);
                        ui.add_space(8.0);
                    }

                    if ui.button("3D View").clicked() {
                        match app.site.as_ref().map(|site| modal.viewer_link(site)) {
                            Some(Ok(link)) => action = Some(Action::OpenViewer(link)),
                            Some(Err(e)) => app.ui_state.add_log(format!("ERROR: {e}")),
                            None => app
                                .ui_state
                                .add_log("ERROR: no valid site URL configured".into()),
                        }
                    }
                });
            });
        });

    if response.backdrop_response.clicked() {
        modal.request_close(now);
    }
    if modal.is_closing() {
        ctx.request_repaint();
    }

    if let Some(Action::OpenViewer(link)) = action {
        app.open_viewer(ShirtViewer::from_route(&link));
    }
}

fn zoom_toolbar(ui: &mut egui::Ui, viewport: &mut ImageViewport) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(viewport.scale() > MIN_SCALE, egui::Button::new("−"))
            .on_hover_text("Zoom out")
            .clicked()
        {
            viewport.zoom_out();
        }
        if ui.button("Reset").on_hover_text("Reset zoom").clicked() {
            viewport.reset_zoom();
        }
        if ui
            .add_enabled(viewport.scale() < MAX_SCALE, egui::Button::new("+"))
            .on_hover_text("Zoom in")
            .clicked()
        {
            viewport.zoom_in();
        }
        ui.label(format!("{:.0}%", viewport.scale() * 100.0));
    });
}

fn variant_picker(ui: &mut egui::Ui, viewport: &mut ImageViewport) {
    let active = viewport.variant_index();
    let mut picked = None;

    ui.horizontal_wrapped(|ui| {
        for (i, variant) in viewport.variants().iter().enumerate() {
            let stroke = if i as isize == active {
                egui::Stroke::new(2.0, ui.visuals().strong_text_color())
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(80))
            };
            let swatch = egui::Button::new("")
                .fill(swatch_color(&variant.color))
                .stroke(stroke)
                .corner_radius(SWATCH / 2.0)
                .min_size(egui::vec2(SWATCH, SWATCH));
            if ui.add(swatch).on_hover_text(&variant.color).clicked() {
                picked = Some(variant.image.clone());
            }
        }
    });

    ui.horizontal(|ui| {
        if ui.button("◀ Prev").clicked() {
            viewport.prev_variant();
        }
        if ui.button("Next ▶").clicked() {
            viewport.next_variant();
        }
    });

    if let Some(image) = picked {
        viewport.select_image(image);
    }
}
