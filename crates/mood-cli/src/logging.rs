//! Tracing bootstrap for the `moodtrack` binary.
//!
//! Logs go to stderr so command output on stdout stays clean, and to a daily
//! rolling file under the moodtrack logs directory when it can be created.
//! `RUST_LOG` overrides the default `info` filter.

use mood_infrastructure::paths::MoodPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "moodtrack.log";

/// Keeps the file writer flushing until dropped.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

pub fn init() -> Option<FileLogGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let log_dir = match MoodPaths::logs_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("File logging disabled: {}", err);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .init();
            return None;
        }
    };

    if let Err(err) = std::fs::create_dir_all(&log_dir) {
        eprintln!(
            "Failed to create log directory {}: {}",
            log_dir.display(),
            err
        );
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return None;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Some(FileLogGuard { _guard: guard })
}
