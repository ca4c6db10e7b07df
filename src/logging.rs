//! Tracing setup.
//!
//! The terminal belongs to the UI, so events go to a log file in the data
//! directory. The filter comes from `CONDUIT_LOG` (default `info`).

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "CONDUIT_LOG";

/// Install the global subscriber writing to `log_path`.
///
/// Calling this again after a subscriber is installed is a no-op.
pub fn init(log_path: &Path) -> io::Result<PathBuf> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    tracing::debug!("Logging to {}", log_path.display());
    Ok(log_path.to_path_buf())
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"))
}
