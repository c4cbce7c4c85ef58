//! Bowling demo entry point
//!
//! Usage: `bowling_demo [CONFIG_PATH]`

use bowling_demo::{BowlingApp, BowlingConfig};
use lane_engine::config::Config;
use lane_engine::foundation::logging;
use lane_engine::Engine;

/// Configuration read when no path is given
const DEFAULT_CONFIG_PATH: &str = "bowling_demo/config/bowling.ron";

fn main() {
    logging::init("info");
    log::info!("Starting bowling demo");

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = match BowlingConfig::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config {}: {}", config_path, e);
            std::process::exit(1);
        }
    };

    let mut app = BowlingApp::new(config.clone());
    if let Err(e) = Engine::run(config.engine, &mut app) {
        log::error!("Bowling demo failed: {}", e);
        std::process::exit(1);
    }

    log::info!("Bowling demo finished successfully");
}
