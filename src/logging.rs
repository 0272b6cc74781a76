use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Initializes console logging on stderr, plus a JSON file layer when enabled.
/// Stdout is left to the readings themselves.
pub fn init_logging(config: &LoggingConfig) {
    // Respect RUST_LOG if set; otherwise use the configured filter
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let file_layer = if config.file_enabled {
        let _ = fs::create_dir_all(&config.directory);

        // Daily rotation, written from a background thread
        let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

        // Keep the guard alive for the whole process so buffered lines are flushed
        std::mem::forget(guard);
        Some(fmt::layer().json().with_writer(non_blocking_writer))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();
}
