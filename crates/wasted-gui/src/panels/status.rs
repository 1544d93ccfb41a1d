use crate::app::WastedApp;

pub fn show(ctx: &egui::Context, app: &mut WastedApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            ui.label(app.ui_state.route.to_string());
            ui.separator();
            if let Some(modal) = &app.modal {
                let vp = modal.viewport();
                ui.label(format!("Zoom: {:.0}%", vp.scale() * 100.0));
                ui.separator();
                if vp.has_variants() {
                    ui.label(format!(
                        "Variant: {}/{}",
                        vp.variant_index() + 1,
                        vp.variants().len()
                    ));
                    ui.separator();
                }
            }
            ui.label(format!("Page scroll: {}", app.page.overflow()));
            ui.separator();
            ui.label(format!("Images: {}", app.textures.ready_count()));
            ui.separator();
            ui.label(format!("Assets: {}", app.config.asset_root.display()));
        });

        ui.add_space(2.0);
    });
}
