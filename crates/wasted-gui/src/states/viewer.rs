use wasted_core::share::CopyFeedback;
use wasted_core::viewer::ShirtViewer;

/// Shirt viewer page: the texture on the shirt and its decoded panels.
#[derive(Default)]
pub struct ViewerState {
    pub viewer: ShirtViewer,
    pub front: Option<egui::TextureHandle>,
    pub back: Option<egui::TextureHandle>,
    pub copy_feedback: CopyFeedback,
}

impl ViewerState {
    /// Switch to another texture; panels are dropped until the worker
    /// delivers the new ones.
    pub fn show_texture(&mut self, viewer: ShirtViewer) {
        self.viewer = viewer;
        self.front = None;
        self.back = None;
    }

    pub fn is_loading(&self) -> bool {
        self.front.is_none() || self.back.is_none()
    }
}
