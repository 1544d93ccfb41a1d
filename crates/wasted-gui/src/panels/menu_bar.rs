use wasted_core::viewer::ShirtViewer;

use crate::app::WastedApp;
use crate::states::Route;

pub fn show(ctx: &egui::Context, app: &mut WastedApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let upload_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Upload Shirt Texture...").shortcut_text(ctx.format_shortcut(&upload_shortcut))).clicked() {
                    ui.close();
                    app.pick_upload();
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui
                    .selectable_label(app.ui_state.route == Route::Catalog, "Catalog")
                    .clicked()
                {
                    ui.close();
                    app.ui_state.route = Route::Catalog;
                }
                if ui
                    .selectable_label(app.ui_state.route == Route::Viewer, "3D Shirt Viewer")
                    .clicked()
                {
                    ui.close();
                    if app.ui_state.route != Route::Viewer {
                        app.open_viewer(ShirtViewer::default());
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            app.pick_upload();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
