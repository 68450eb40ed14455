//! Platform logging initialization for the terminal client.
//!
//! The UI owns the terminal, so logs go to the configured file only.

use client_logging::{initialize_file_logger, parse_level};

use super::config::ClientConfig;

pub fn initialize(config: &ClientConfig, level_override: Option<&str>) {
    let level = parse_level(level_override.unwrap_or(&config.log_level));
    if let Err(err) = initialize_file_logger(&config.log_file, level) {
        eprintln!(
            "Warning: Could not create log file at {:?}: {}",
            config.log_file, err
        );
    }
}
