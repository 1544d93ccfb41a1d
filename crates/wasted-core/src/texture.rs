use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{DynamicImage, RgbaImage};
use rayon::prelude::*;
use tracing::info;

use crate::consts::{BACK_TEXTURE_WINDOW, FRONT_TEXTURE_WINDOW, SHIRT_ALPHA_TEST};
use crate::error::{Result, WastedError};

/// Horizontal slice of a texture in UV space: starts at `offset` and spans
/// `repeat` of the full width. The full height is always used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureWindow {
    pub offset: f64,
    pub repeat: f64,
}

impl TextureWindow {
    pub const FRONT: Self = Self {
        offset: FRONT_TEXTURE_WINDOW.0,
        repeat: FRONT_TEXTURE_WINDOW.1,
    };

    pub const BACK: Self = Self {
        offset: BACK_TEXTURE_WINDOW.0,
        repeat: BACK_TEXTURE_WINDOW.1,
    };

    /// Column range `(x, width)` of this window in a texture `width` pixels wide.
    pub fn pixel_span(&self, width: u32) -> (u32, u32) {
        let x = ((self.offset * width as f64).round() as u32).min(width);
        let w = ((self.repeat * width as f64).round() as u32).min(width - x);
        (x, w)
    }
}

/// Front and back panels cut from one print layout.
pub struct ShirtTextures {
    pub front: RgbaImage,
    pub back: RgbaImage,
}

/// Cut a side-by-side print layout (front on the left half, back on the
/// right half) into the two panel textures, with the alpha test applied.
pub fn split_shirt_texture(texture: &DynamicImage) -> Result<ShirtTextures> {
    let (width, height) = (texture.width(), texture.height());
    let (front_x, front_w) = TextureWindow::FRONT.pixel_span(width);
    let (back_x, back_w) = TextureWindow::BACK.pixel_span(width);
    if front_w == 0 || back_w == 0 || height == 0 {
        return Err(WastedError::TextureTooNarrow { width });
    }

    let mut front = texture.crop_imm(front_x, 0, front_w, height).to_rgba8();
    let mut back = texture.crop_imm(back_x, 0, back_w, height).to_rgba8();
    apply_alpha_test(&mut front, SHIRT_ALPHA_TEST);
    apply_alpha_test(&mut back, SHIRT_ALPHA_TEST);

    Ok(ShirtTextures { front, back })
}

/// Make every pixel whose opacity is below `threshold` (0..1) fully
/// transparent, so the garment outline has a hard edge.
pub fn apply_alpha_test(image: &mut RgbaImage, threshold: f32) {
    let cutoff = threshold.clamp(0.0, 1.0) * 255.0;
    for pixel in image.pixels_mut() {
        if (pixel.0[3] as f32) < cutoff {
            pixel.0[3] = 0;
        }
    }
}

/// Output paths `<stem>_front.png` and `<stem>_back.png` inside `out_dir`.
pub fn panel_paths(input: &Path, out_dir: &Path) -> (PathBuf, PathBuf) {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "texture".to_string());
    (
        out_dir.join(format!("{stem}_front.png")),
        out_dir.join(format!("{stem}_back.png")),
    )
}

/// Split one texture file and write both panels as PNG.
pub fn split_texture_file(input: &Path, out_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let texture = image::open(input)?;
    let panels = split_shirt_texture(&texture)?;
    let (front_path, back_path) = panel_paths(input, out_dir);
    panels.front.save(&front_path)?;
    panels.back.save(&back_path)?;
    info!(
        input = %input.display(),
        front = %front_path.display(),
        back = %back_path.display(),
        "Texture split"
    );
    Ok((front_path, back_path))
}

/// Split many texture files in parallel.
///
/// Calls `on_progress(items_done)` as each file finishes. Results keep the
/// input order; one failing file does not stop the others. Inputs whose
/// panel names collide with an earlier input (same stem, other directory)
/// fail with `DuplicateOutput` instead of overwriting its panels.
pub fn split_texture_files(
    inputs: &[PathBuf],
    out_dir: &Path,
    on_progress: impl Fn(usize) + Send + Sync,
) -> Vec<Result<(PathBuf, PathBuf)>> {
    let mut claimed = HashSet::new();
    let duplicates: Vec<bool> = inputs
        .iter()
        .map(|input| !claimed.insert(panel_paths(input, out_dir).0))
        .collect();

    let done = AtomicUsize::new(0);
    inputs
        .par_iter()
        .zip(duplicates.par_iter())
        .map(|(input, &duplicate)| {
            let result = if duplicate {
                Err(WastedError::DuplicateOutput(panel_paths(input, out_dir).0))
            } else {
                split_texture_file(input, out_dir)
            };
            let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
            on_progress(completed);
            result
        })
        .collect()
}
