//! Tracing setup.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to `file`.
///
/// Stdout belongs to the terminal UI, so logs go to a file with ANSI
/// colors off. `RUST_LOG` wins over `default_filter`.
pub fn init(file: &Path, default_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(file)
        .with_context(|| format!("Failed to create log file {}", file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("Invalid log filter {default_filter:?}"))?;

    // Don't fail if a subscriber is already installed (tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
