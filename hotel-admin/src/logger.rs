//! Logging setup
//!
//! Console output goes to stderr so it never mixes with rendered tables.
//! When a log directory is given, logs go to a daily rotating file instead.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the logger; keep the returned guard alive until exit
pub fn init_logger(level: &str, log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(dir) = log_dir {
        fs::create_dir_all(dir)?;
        let appender = tracing_appender::rolling::daily(dir, "hotel-admin");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true).with_writer(writer))
            .try_init()?;
        return Ok(Some(guard));
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(None)
}
