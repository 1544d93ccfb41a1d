use egui::Color32;

/// Swatch fill for a catalog color name. Unknown names get a neutral grey.
pub(crate) fn swatch_color(name: &str) -> Color32 {
    match name.to_ascii_lowercase().as_str() {
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        "cyan" => Color32::from_rgb(0, 255, 255),
        "gold" => Color32::from_rgb(255, 215, 0),
        "green" => Color32::from_rgb(0, 128, 0),
        "indigo" => Color32::from_rgb(75, 0, 130),
        "magenta" => Color32::from_rgb(255, 0, 255),
        "darkslateblue" => Color32::from_rgb(72, 61, 139),
        "deeppink" => Color32::from_rgb(255, 20, 147),
        "orange" => Color32::from_rgb(255, 165, 0),
        "red" => Color32::from_rgb(255, 0, 0),
        "blue" => Color32::from_rgb(0, 0, 255),
        _ => Color32::from_gray(128),
    }
}

/// Draw a texture fitted into a square box, or a placeholder while it is
/// missing.
pub(crate) fn texture_box(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    size: egui::Vec2,
    placeholder: &str,
) -> egui::Response {
    match texture {
        Some(texture) => ui.add(
            egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                .fit_to_exact_size(size),
        ),
        None => {
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 4.0, Color32::from_gray(40));
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                placeholder,
                egui::FontId::proportional(14.0),
                Color32::from_gray(140),
            );
            response
        }
    }
}

pub(crate) fn price_text(price: &str) -> egui::RichText {
    egui::RichText::new(price).color(Color32::from_rgb(120, 200, 120))
}
