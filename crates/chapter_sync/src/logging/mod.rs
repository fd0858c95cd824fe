//! Logging setup on top of the `tracing` ecosystem.
//!
//! The library only emits `tracing` events. Binaries pick a subscriber:
//! [`init_tracing`] for stderr, or [`init_tracing_with_file`] to also keep
//! a daily rolling log file.

mod types;

pub use types::LogLevel;

use std::io;
use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix for rolling log files.
const LOG_FILE_PREFIX: &str = "chapter-sync";

/// Errors raised while installing a subscriber.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to create log directory: {0}")]
    Directory(#[from] io::Error),

    #[error("Failed to create log file appender: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// Initialize global tracing subscriber for application-wide logging.
///
/// RUST_LOG wins over `default_level`. Output goes to stderr so stdout stays
/// free for command output. Should be called once at startup.
pub fn init_tracing(default_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_writer(io::stderr),
        )
        .with(env_filter(default_level))
        .init();
}

/// Like [`init_tracing`], plus a daily rolling file under `log_dir`.
///
/// Keep the returned guard alive for the life of the program; dropping it
/// flushes and stops the file writer.
pub fn init_tracing_with_file(
    default_level: LogLevel,
    log_dir: &Path,
) -> Result<WorkerGuard, InitError> {
    std::fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .with(env_filter(default_level))
        .try_init()?;

    Ok(guard)
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

/// RUST_LOG directives, with `default_level` applied when it is unset.
fn env_filter(default_level: LogLevel) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    filter_with_default(default_level, &directives)
}

fn filter_with_default(default_level: LogLevel, directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level.to_tracing_level()).into())
        .parse_lossy(directives)
}
