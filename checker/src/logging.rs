//! Logging initialisation
//!
//! Filter priority: `RUST_LOG` > `CALC_CHECK_LOG_LEVEL` > `-v` count > `info`.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the default log level
pub const LOG_LEVEL_ENV: &str = "CALC_CHECK_LOG_LEVEL";

/// Log file name prefix inside `--log-dir`
const LOG_FILE_PREFIX: &str = "calc-api-check.log";

/// Build the filter without installing it
pub fn build_filter(verbosity: u8) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }
    if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&level) {
            return filter;
        }
    }
    EnvFilter::new(level_for(verbosity))
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// Logs go to stderr so that stdout carries only the report. When `log_dir`
/// is given, a daily rolling file is written there as well; keep the returned
/// guard alive until exit or buffered lines are lost.
pub fn init(verbosity: u8, log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(build_filter(verbosity))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
