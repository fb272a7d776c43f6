//! Logging infrastructure for Weekly Alerts.
//!
//! Application-wide logging goes through the `tracing` ecosystem: a stderr
//! layer for interactive use plus an optional non-blocking file layer
//! writing a timestamped log under the configured logs folder.

mod types;

pub use types::{LogLevel, ParseLevelError};

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize global tracing subscriber for application-wide logging.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr with timestamps
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(env_filter(default_level))
        .init();
}

/// Initialize tracing with an additional file layer.
///
/// The log file is created under `logs_dir` with a startup timestamp in its
/// name. Returns the appender guard, which must be kept alive for the
/// lifetime of the process or buffered log lines are lost. Falls back to
/// stderr-only logging if the logs directory cannot be created.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all(logs_dir) {
        eprintln!(
            "Warning: failed to create logs directory {}: {}",
            logs_dir.display(),
            e
        );
        init_tracing(default_level);
        return None;
    }

    let file_name = format!(
        "weekly-alerts-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    );
    let appender = tracing_appender::rolling::never(logs_dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(env_filter(default_level))
        .init();

    Some(guard)
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_falls_back_to_default_level() {
        // The filter string must parse regardless of RUST_LOG.
        let filter = EnvFilter::new(LogLevel::Debug.as_filter_str());
        assert_eq!(filter.to_string(), "debug");
    }
}
