//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured level when set.

use crate::config::Settings;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_level()))
}

/// Logs to the configured file, for the terminal UI.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_file(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Logs to stderr, for the non-interactive commands.
pub fn init_stderr(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .try_init();
}
