//! Diagnostic logging.
//!
//! Log lines go to a file under the user data directory, never to the
//! terminal the dashboard is drawing on. Filtering follows `RUST_LOG` and
//! defaults to `portadash=info`.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portadash")
}

pub fn init() -> Result<()> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join("portadash.log");
    let log_file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portadash=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}
