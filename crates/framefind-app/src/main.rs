mod app_state;
mod cli;

use std::path::Path;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use framefind_config::FrameFindConfig;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is read before logging starts so its level can seed the filter;
    // a failure is reported once the subscriber is up.
    let loaded = match args.config.as_deref() {
        Some(path) => framefind_config::load_config_from(Path::new(path)),
        None => framefind_config::load_config(),
    };
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();

    // Initialize logging
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config_level.as_directive());
    let directive: Directive = log_directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("framefind v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        FrameFindConfig::default()
    });

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::FrameFindApp::new(config, args);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
