use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;

use wasted_core::assets::{is_data_url, load_image, read_upload};
use wasted_core::viewer::ShirtViewer;

use crate::convert::{dynamic_to_color_image, rgba_to_color_image};
use crate::messages::WorkerResult;

use super::{send, send_error, send_log};

pub(super) fn handle_load_image(
    asset_root: &Path,
    image_ref: String,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match load_image(asset_root, &image_ref) {
        Ok(image) => {
            let image = dynamic_to_color_image(&image);
            send(tx, ctx, WorkerResult::ImageLoaded { image_ref, image });
        }
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::ImageFailed {
                message: format!("Failed to load {}: {e}", display_ref(&image_ref)),
                image_ref,
            },
        ),
    }
}

pub(super) fn handle_load_shirt_panels(
    asset_root: &Path,
    texture_ref: String,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    let viewer = ShirtViewer::with_texture(texture_ref.as_str());
    match viewer.load_panels(asset_root) {
        Ok(panels) => {
            send_log(
                tx,
                ctx,
                format!(
                    "Shirt panels ready: {} ({}x{} + {}x{}) in {}ms",
                    display_ref(&texture_ref),
                    panels.front.width(),
                    panels.front.height(),
                    panels.back.width(),
                    panels.back.height(),
                    start.elapsed().as_millis()
                ),
            );
            send(
                tx,
                ctx,
                WorkerResult::ShirtPanelsLoaded {
                    texture_ref,
                    front: rgba_to_color_image(&panels.front),
                    back: rgba_to_color_image(&panels.back),
                },
            );
        }
        Err(e) => send_error(
            tx,
            ctx,
            format!("Failed to load shirt texture {}: {e}", display_ref(&texture_ref)),
        ),
    }
}

pub(super) fn handle_read_upload(
    path: PathBuf,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match read_upload(&path) {
        Ok(data_url) => send(tx, ctx, WorkerResult::UploadRead { path, data_url }),
        Err(e) => send_error(tx, ctx, format!("Failed to read {}: {e}", path.display())),
    }
}

/// Short form of an image reference for log lines; data URLs can be
/// megabytes long.
pub(crate) fn display_ref(image_ref: &str) -> &str {
    if is_data_url(image_ref) {
        "<uploaded image>"
    } else {
        image_ref
    }
}
