use std::convert::Infallible;
use std::time::{Duration, Instant};

use wasted_core::share::{copy_share_link, Clipboard};

use crate::app::WastedApp;
use crate::panels::helpers::texture_box;
use crate::states::Route;
use crate::workers::display_ref;

/// System clipboard as seen through egui.
struct EguiClipboard<'a>(&'a egui::Context);

impl Clipboard for EguiClipboard<'_> {
    type Error = Infallible;

    fn write_text(&mut self, text: &str) -> Result<(), Infallible> {
        self.0.copy_text(text.to_owned());
        Ok(())
    }
}

pub fn show(ctx: &egui::Context, app: &mut WastedApp) {
    let now = Instant::now();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("3D Shirt Viewer");
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Texture:");
            ui.monospace(display_ref(app.viewer.viewer.texture_ref()));
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Upload texture...").clicked() {
                app.pick_upload();
            }

            let label = app.viewer.copy_feedback.label(now);
            if ui.button(label).clicked() {
                copy_link(ctx, app, now);
            }

            if ui.button("Back to catalog").clicked() {
                app.ui_state.route = Route::Catalog;
            }
        });
        if app.viewer.copy_feedback.is_visible(now) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        ui.add_space(12.0);

        // Front and back panels side by side.
        let side = ((ui.available_width() - 24.0) / 2.0)
            .min(ui.available_height() - 32.0)
            .max(64.0);
        let placeholder = if app.viewer.is_loading() {
            "Loading..."
        } else {
            ""
        };
        ui.horizontal_top(|ui| {
            for (title, texture) in [("Front", &app.viewer.front), ("Back", &app.viewer.back)] {
                ui.vertical(|ui| {
                    ui.strong(title);
                    texture_box(ui, texture.as_ref(), egui::vec2(side, side), placeholder);
                });
            }
        });
    });
}

fn copy_link(ctx: &egui::Context, app: &mut WastedApp, now: Instant) {
    let Some(site) = app.site.as_ref() else {
        app.ui_state
            .add_log("ERROR: no valid site URL configured".into());
        return;
    };
    match app.viewer.viewer.share_link(site) {
        Ok(link) => {
            let mut clipboard = EguiClipboard(ctx);
            if copy_share_link(&mut clipboard, &link, &mut app.viewer.copy_feedback, now) {
                app.ui_state.add_log("Share link copied".into());
            }
        }
        Err(e) => app.ui_state.add_log(format!("ERROR: {e}")),
    }
}
