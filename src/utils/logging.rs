use crate::config::APP_NAME;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const LOG_FILE: &str = "modpack-changelog.log";

/// Installs the stderr logger and, when a data directory exists, a file logger.
/// Keep the returned guard alive until exit so buffered file output is flushed.
pub fn init(verbosity: u8) -> Option<WorkerGuard> {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter());

    let (file_layer, guard) = match file_appender() {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    guard
}

fn file_appender() -> Option<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(log_dir()?)
        .ok()
}

fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "martes", APP_NAME).map(|dirs| dirs.data_local_dir().join("logs"))
}
