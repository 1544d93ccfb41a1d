mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

use std::path::PathBuf;

use wasted_core::config::StoreConfig;

/// Environment variable naming the store config file.
const CONFIG_ENV: &str = "WASTED_CONFIG";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config();
    // Optional start link, e.g. `/3dshirts?shirt=/Tees/FireTees/wastedfire.png`.
    let start_link = std::env::args().nth(1);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Wasted"),
        ..Default::default()
    };

    eframe::run_native(
        "WastedStore",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::WastedApp::new(
                &cc.egui_ctx,
                config,
                start_link.as_deref(),
            )?))
        }),
    )
}

fn load_config() -> StoreConfig {
    let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) else {
        return StoreConfig::default();
    };
    match StoreConfig::load(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "Loaded store config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Using default store config");
            StoreConfig::default()
        }
    }
}
