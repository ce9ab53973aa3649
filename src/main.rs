// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! DemoLink - Main Entry Point
//!
//! A structured demo-link widget editor: download-style links with display
//! text, a file-extension badge, and a URL. Built with Rust and egui.

mod app;
mod config;
mod demolink;
mod error;
mod export;
mod files;
mod model;
mod state;
mod theme;
mod ui;
mod view;

use app::DemoLinkApp;
use config::load_config;
use log::info;
use state::AppState;

/// Application name constant.
const APP_NAME: &str = "DemoLink";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    // Load settings to get window configuration
    let settings = load_config();
    let window_size = &settings.window_size;

    info!(
        "Window configuration: {}x{}, maximized: {}",
        window_size.width, window_size.height, window_size.maximized
    );

    // Configure the native window options
    let mut viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([window_size.width, window_size.height])
        .with_min_inner_size([480.0, 320.0]);

    // Apply position if saved
    if let (Some(x), Some(y)) = (window_size.x, window_size.y) {
        viewport = viewport.with_position([x, y]);
    }

    // Apply maximized state
    if window_size.maximized {
        viewport = viewport.with_maximized(true);
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| {
            let state = AppState::new(settings);
            Ok(Box::new(DemoLinkApp::new(cc, state)))
        }),
    )
}
