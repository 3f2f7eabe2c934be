//! File logging
//!
//! The terminal belongs to the picker, so diagnostics go to
//! `<cache_dir>/mux-sesh/mux-sesh.log`. The filter comes from `RUST_LOG`
//! and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default log file location
#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("mux-sesh").join("mux-sesh.log"))
}

/// Open `path` for appending, creating parent directories
///
/// # Errors
///
/// Returns an I/O error if the directory or file cannot be created.
pub fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to the log file
///
/// Returns the path logged to.
///
/// # Errors
///
/// Returns an I/O error if no cache directory exists or the file cannot be
/// opened. Nothing is installed in that case.
pub fn init_file_logging() -> io::Result<PathBuf> {
    let path = log_file_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no cache directory"))?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(path)
}
