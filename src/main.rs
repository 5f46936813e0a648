//#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
mod app;
mod config;
mod constants;
mod data;
mod models;
mod screens;
mod state;
mod ui_components;
mod utils;
mod view;

use app::HelplineApp;
use config::AppConfig;
use constants::{APP_HEIGHT, APP_MIN_HEIGHT, APP_MIN_WIDTH, APP_WIDTH};
use eframe::egui;

// App version and metadata
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_NAME: &str = "Helpline Directory";
const APP_DESCRIPTION: &str = "Emergency Service Numbers";

fn main() -> Result<(), eframe::Error> {
    // Set RUST_LOG=debug for verbose output, RUST_LOG=info for normal logs
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Warn)
        .filter_module("naga", log::LevelFilter::Warn)
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("arboard", log::LevelFilter::Warn)
        .init();

    log::info!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("[Main] {}", e);
            std::process::exit(2);
        }
    };

    if let Some(id) = data::catalog::duplicate_id(data::catalog::SERVICES) {
        log::error!("[Main] Duplicate service id {} in catalog", id);
        std::process::exit(1);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("{} v{} - {}", APP_NAME, APP_VERSION, APP_DESCRIPTION))
            .with_inner_size([APP_WIDTH, APP_HEIGHT])
            .with_min_inner_size([APP_MIN_WIDTH, APP_MIN_HEIGHT])
            .with_resizable(true)
            .with_decorations(true)
            .with_icon(utils::artwork::window_icon()),
        ..Default::default()
    };

    eframe::run_native(
        &format!("{} v{}", APP_NAME, APP_VERSION),
        options,
        Box::new(move |cc| Ok(Box::new(HelplineApp::new(cc, config)))),
    )
}
