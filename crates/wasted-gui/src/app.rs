use std::sync::mpsc;
use std::time::Instant;

use url::Url;
use wasted_core::catalog::Catalog;
use wasted_core::config::StoreConfig;
use wasted_core::consts::VIEWER_ROUTE;
use wasted_core::modal::ProductModal;
use wasted_core::scroll_lock::PageScroll;
use wasted_core::share::parse_link;
use wasted_core::viewer::ShirtViewer;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{Route, TextureCache, UIState, ViewerState};
use crate::workers::{self, display_ref};

pub struct WastedApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: StoreConfig,
    /// Base for share links; `None` when the configured site URL is invalid.
    pub site: Option<Url>,
    pub catalog: Catalog,
    pub page: PageScroll,
    pub modal: Option<ProductModal>,
    pub textures: TextureCache,
    pub viewer: ViewerState,
    pub ui_state: UIState,
}

impl WastedApp {
    pub fn new(
        ctx: &egui::Context,
        config: StoreConfig,
        start_link: Option<&str>,
    ) -> std::io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(config.asset_root.clone(), result_tx, ctx.clone())?;

        let mut ui_state = UIState::default();
        let site = match config.site() {
            Ok(site) => Some(site),
            Err(e) => {
                ui_state.add_log(format!("ERROR: invalid site_url '{}': {e}", config.site_url));
                None
            }
        };
        let catalog = match config.catalog() {
            Ok(catalog) => catalog,
            Err(e) => {
                ui_state.add_log(format!("ERROR: catalog not loaded, using built-in: {e}"));
                Catalog::builtin()
            }
        };
        ui_state.add_log(format!("{} products in catalog", catalog.len()));

        let mut app = Self {
            cmd_tx,
            result_rx,
            config,
            site,
            catalog,
            page: PageScroll::default(),
            modal: None,
            textures: TextureCache::default(),
            viewer: ViewerState::default(),
            ui_state,
        };
        if let Some(link) = start_link {
            app.follow_link(link);
        }
        Ok(app)
    }

    /// Navigate to an in-app link such as `/3dshirts?shirt=...`.
    pub fn follow_link(&mut self, link: &str) {
        match parse_link(link) {
            Ok(url) if is_viewer_route(&url) => self.open_viewer(ShirtViewer::from_route(&url)),
            Ok(url) if url.path() == "/" => self.ui_state.route = Route::Catalog,
            Ok(url) => self
                .ui_state
                .add_log(format!("ERROR: no page at {}", url.path())),
            Err(e) => self.ui_state.add_log(format!("ERROR: bad link '{link}': {e}")),
        }
    }

    /// Open the quick view and start decoding every image it can show, so
    /// switching colors does not wait on the worker.
    pub fn open_modal(&mut self, product_id: u32) {
        match self.catalog.get(product_id) {
            Ok(product) => {
                for image_ref in product.image_refs() {
                    self.textures.slot(image_ref, &self.cmd_tx);
                }
                self.modal = Some(ProductModal::open(product, &self.page));
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Show the shirt viewer. Leaving the catalog drops any open modal,
    /// which gives page scrolling back.
    pub fn open_viewer(&mut self, viewer: ShirtViewer) {
        self.modal = None;
        self.send_command(WorkerCommand::LoadShirtPanels {
            texture_ref: viewer.texture_ref().to_string(),
        });
        self.viewer.show_texture(viewer);
        self.ui_state.route = Route::Viewer;
    }

    /// Ask for a texture file in a dialog; the worker turns it into an upload.
    pub fn pick_upload(&self) {
        let cmd_tx = self.cmd_tx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "webp", "gif", "bmp"])
                .add_filter("All files", &["*"])
                .pick_file()
            {
                let _ = cmd_tx.send(WorkerCommand::ReadUpload { path });
            }
        });
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { image_ref, image } => {
                    self.textures.insert(ctx, image_ref, image);
                }
                WorkerResult::ImageFailed { image_ref, message } => {
                    self.textures.mark_failed(image_ref);
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::ShirtPanelsLoaded {
                    texture_ref,
                    front,
                    back,
                } => {
                    // A newer texture may have been chosen meanwhile.
                    if texture_ref == self.viewer.viewer.texture_ref() {
                        let name = display_ref(&texture_ref);
                        self.viewer.front = Some(ctx.load_texture(
                            format!("{name}#front"),
                            front,
                            egui::TextureOptions::LINEAR,
                        ));
                        self.viewer.back = Some(ctx.load_texture(
                            format!("{name}#back"),
                            back,
                            egui::TextureOptions::LINEAR,
                        ));
                    }
                }
                WorkerResult::UploadRead { path, data_url } => {
                    self.ui_state
                        .add_log(format!("Uploaded texture: {}", path.display()));
                    let mut viewer = self.viewer.viewer.clone();
                    viewer.apply_upload(data_url);
                    self.open_viewer(viewer);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Finish a pending modal close once its transition is over.
    fn poll_modal(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        if modal.poll(now) {
            self.modal = None;
        } else if let Some(remaining) = modal.lifecycle().remaining(now) {
            ctx.request_repaint_after(remaining.min(std::time::Duration::from_millis(16)));
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

fn is_viewer_route(url: &Url) -> bool {
    url.path().trim_matches('/') == VIEWER_ROUTE
}

impl eframe::App for WastedApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.poll_modal(ctx, Instant::now());

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        match self.ui_state.route {
            Route::Catalog => panels::catalog::show(ctx, self),
            Route::Viewer => panels::shirt::show(ctx, self),
        }
        panels::modal::show(ctx, self);

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Wasted")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Wasted");
                        ui.label("Storefront and shirt viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
