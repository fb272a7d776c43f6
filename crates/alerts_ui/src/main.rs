//! Weekly Alerts - Main entry point
//!
//! Handles application-level logging initialization, configuration
//! loading, directory creation, and launching the iced application.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use alerts_core::config::ConfigManager;
use alerts_core::logging::{init_tracing, init_tracing_with_file, LogLevel};

mod app;
mod handlers;
mod theme;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Load configuration first (needed for logs directory path)
    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);

    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    // Initialize application-level logging
    let level = config_manager
        .settings()
        .logging
        .level
        .parse()
        .unwrap_or(LogLevel::Info);
    let _log_guard = if config_manager.settings().logging.log_to_file {
        init_tracing_with_file(level, &config_manager.logs_folder())
    } else {
        init_tracing(level);
        None
    };

    tracing::info!("Weekly Alerts starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", alerts_core::version());

    // Ensure all configured directories exist
    if let Err(e) = config_manager.ensure_dirs_exist() {
        tracing::error!("Failed to create directories: {}", e);
    }

    // Wrap config for sharing with async dialog tasks
    let config = Arc::new(Mutex::new(config_manager));

    iced::application(
        move || App::new(Arc::clone(&config)),
        App::update,
        App::view,
    )
    .title("Weekly Alerts")
    .subscription(App::subscription)
    .theme(App::theme)
    .window(iced::window::Settings {
        size: iced::Size::new(760.0, 400.0),
        position: iced::window::Position::Centered,
        ..Default::default()
    })
    .run()
}
