use std::path::PathBuf;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode a catalog or uploaded image for display.
    LoadImage { image_ref: String },

    /// Load a shirt texture and cut it into front/back panels.
    LoadShirtPanels { texture_ref: String },

    /// Read a user-picked file into a `data:` URL.
    ReadUpload { path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        image_ref: String,
        image: egui::ColorImage,
    },

    ImageFailed {
        image_ref: String,
        message: String,
    },

    ShirtPanelsLoaded {
        texture_ref: String,
        front: egui::ColorImage,
        back: egui::ColorImage,
    },

    UploadRead {
        path: PathBuf,
        data_url: String,
    },

    Error {
        message: String,
    },

    Log {
        message: String,
    },
}
