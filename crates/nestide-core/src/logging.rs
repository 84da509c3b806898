//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem.
///
/// Logs are written to `~/.local/share/nestide/logs/`.
/// Log level is controlled by the `NESTIDE_LOG` environment variable.
///
/// The host calls this once at plugin load; calling it a second time in the
/// same process is the caller's bug (the subscriber refuses reinstallation).
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "nestide.log");

    // Default to info, allow override via NESTIDE_LOG
    let env_filter = EnvFilter::try_from_env("NESTIDE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("nestide=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Nestide core starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Directory the rolling appender writes into.
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("nestide").join("logs")
}
