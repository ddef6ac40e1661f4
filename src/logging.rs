//! File logging.
//!
//! The TUI owns stdout, so tracing output goes to
//! `~/.healthdesk/healthdesk.log`. `RUST_LOG` overrides the default filter.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "healthdesk=info";
pub const LOG_FILE_NAME: &str = "healthdesk.log";

/// `~/.healthdesk`, or `None` when there is no home directory.
pub fn log_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".healthdesk"))
}

/// Create `dir` if needed and open the log file in append mode.
pub fn open_log_file(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled because the file could not be opened.
pub fn init_logging() -> Option<PathBuf> {
    let dir = log_dir()?;
    let file = match open_log_file(&dir) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            return None;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();

    installed.ok().map(|_| dir.join(LOG_FILE_NAME))
}
