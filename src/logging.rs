use crate::constants::LOG_DIR_VAR;
use std::fs;
use std::path::Path;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging on stderr, plus a JSON log file when
/// `GEOCODER_LOG_DIR` is set.
///
/// An unusable log directory falls back to console-only logging. Hold the
/// returned guard until exit so buffered file logs are flushed.
pub fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("csv_geocoder=info"));

    // stdout is reserved for progress output
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    let mut setup_error = None;
    let (file_layer, guard) = match std::env::var(LOG_DIR_VAR) {
        Ok(dir) if !dir.trim().is_empty() => match file_appender(Path::new(&dir)) {
            Ok(appender) => {
                let (non_blocking_writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer().json().with_writer(non_blocking_writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                setup_error = Some(e);
                (None, None)
            }
        },
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    if let Some(e) = setup_error {
        warn!("File logging disabled: {}", e);
    }

    guard
}

/// Daily-rolling `geocoder.<date>.log` files under `dir`.
fn file_appender(dir: &Path) -> Result<RollingFileAppender, String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("cannot create log directory '{}': {}", dir.display(), e))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("geocoder")
        .filename_suffix("log")
        .build(dir)
        .map_err(|e| format!("cannot open log file in '{}': {}", dir.display(), e))
}
