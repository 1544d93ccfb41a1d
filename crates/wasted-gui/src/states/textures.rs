use std::collections::HashMap;
use std::sync::mpsc;

use crate::messages::WorkerCommand;
use crate::workers::display_ref;

/// Decoding state of one image reference.
pub enum TextureSlot {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

/// GPU textures keyed by image reference. Images are decoded on the worker
/// thread the first time they are asked for.
#[derive(Default)]
pub struct TextureCache {
    slots: HashMap<String, TextureSlot>,
}

impl TextureCache {
    pub fn slot(
        &mut self,
        image_ref: &str,
        cmd_tx: &mpsc::Sender<WorkerCommand>,
    ) -> &TextureSlot {
        if !self.slots.contains_key(image_ref) {
            let _ = cmd_tx.send(WorkerCommand::LoadImage {
                image_ref: image_ref.to_string(),
            });
        }
        self.slots
            .entry(image_ref.to_string())
            .or_insert(TextureSlot::Loading)
    }

    pub fn insert(&mut self, ctx: &egui::Context, image_ref: String, image: egui::ColorImage) {
        let texture = ctx.load_texture(
            display_ref(&image_ref),
            image,
            egui::TextureOptions::LINEAR,
        );
        self.slots.insert(image_ref, TextureSlot::Ready(texture));
    }

    pub fn mark_failed(&mut self, image_ref: String) {
        self.slots.insert(image_ref, TextureSlot::Failed);
    }

    pub fn ready_count(&self) -> usize {
        self.slots
            .values()
            .filter(|s| matches!(s, TextureSlot::Ready(_)))
            .count()
    }
}
