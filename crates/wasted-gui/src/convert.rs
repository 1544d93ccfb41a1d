use image::{DynamicImage, RgbaImage};

/// Convert an RGBA buffer to an egui ColorImage.
pub fn rgba_to_color_image(image: &RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

pub fn dynamic_to_color_image(image: &DynamicImage) -> egui::ColorImage {
    rgba_to_color_image(&image.to_rgba8())
}
