use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Keeps the background log writer alive. Hold it until exit.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Logs to a file; the terminal is in raw mode while the palette runs.
pub fn init() -> LoggingGuard {
    let (writer, log_path): (Box<dyn Write + Send>, Option<PathBuf>) = match open_log_file() {
        Ok((file, path)) => (Box::new(file), Some(path)),
        Err(e) => {
            eprintln!("[tabpal] Logging disabled, no writable log file: {e}");
            (Box::new(io::sink()), None)
        }
    };
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(writer);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    if let Some(path) = log_path {
        tracing::info!(log_path = %path.display(), "Logging initialized");
    }

    LoggingGuard {
        _file_guard: file_guard,
    }
}

const LOG_FILE: &str = "tabpal.log";

/// Opens the log in the config dir, falling back to the temp dir.
fn open_log_file() -> io::Result<(File, PathBuf)> {
    let fallback = std::env::temp_dir().join("tabpal-logs");
    match crate::config::config_dir().map(|dir| dir.join("logs")) {
        Some(dir) => open_in(&dir).or_else(|_| open_in(&fallback)),
        None => open_in(&fallback),
    }
}

fn open_in(dir: &Path) -> io::Result<(File, PathBuf)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}
