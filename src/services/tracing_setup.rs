//! Logging setup
//!
//! The terminal belongs to the UI, so diagnostics go to a log file.
//! The filter comes from `RUST_LOG` and defaults to `info`.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default log location: `<temp dir>/bewitched.log`
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("bewitched.log")
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `log_path`
///
/// Logging is best effort: if the file cannot be opened, or a subscriber is
/// already installed, the editor runs without one.
pub fn init_global(log_path: &Path) {
    let file = match open_log_file(log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: could not open log file {}: {}",
                log_path.display(),
                e
            );
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init();
}
