use crate::app::WastedApp;
use crate::panels::helpers::{price_text, texture_box};
use crate::states::TextureSlot;

const CARD_WIDTH: f32 = 200.0;
const THUMBNAIL: f32 = 180.0;

struct Card {
    id: u32,
    name: String,
    image: String,
    price: String,
    variants: usize,
}

pub fn show(ctx: &egui::Context, app: &mut WastedApp) {
    let cards: Vec<Card> = app
        .catalog
        .iter()
        .map(|p| Card {
            id: p.id,
            name: p.name.clone(),
            image: p.image.clone(),
            price: p.price.clone(),
            variants: p.colors.len(),
        })
        .collect();
    let mut opened = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Shop");
        ui.add_space(8.0);

        // The page does not scroll under an open modal.
        egui::ScrollArea::vertical()
            .enable_scrolling(!app.page.is_locked())
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for card in &cards {
                        let response = egui::Frame::group(ui.style())
                            .show(ui, |ui| {
                                ui.set_width(CARD_WIDTH);
                                ui.vertical_centered(|ui| {
                                    let (texture, placeholder) =
                                        match app.textures.slot(&card.image, &app.cmd_tx) {
                                            TextureSlot::Ready(t) => (Some(t), ""),
                                            TextureSlot::Loading => (None, "Loading..."),
                                            TextureSlot::Failed => (None, "No image"),
                                        };
                                    texture_box(
                                        ui,
                                        texture,
                                        egui::vec2(THUMBNAIL, THUMBNAIL),
                                        placeholder,
                                    );
                                    ui.strong(&card.name);
                                    ui.label(price_text(&card.price));
                                    if card.variants > 0 {
                                        ui.small(format!("{} colors", card.variants));
                                    }
                                });
                            })
                            .response
                            .interact(egui::Sense::click())
                            .on_hover_cursor(egui::CursorIcon::PointingHand);
                        if response.clicked() {
                            opened = Some(card.id);
                        }
                    }
                });
            });
    });

    if let Some(id) = opened {
        if app.modal.is_none() {
            app.open_modal(id);
        }
    }
}
