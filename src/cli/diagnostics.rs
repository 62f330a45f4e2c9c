use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Install the global diagnostic subscriber writing to `destination` (`-` for
/// stderr). `RUST_LOG` overrides the level chosen by `debug`.
///
/// The returned guard flushes buffered messages when dropped and must be held for
/// as long as the process logs.
pub fn init(destination: &Path, debug: bool) -> Result<WorkerGuard> {
    let (writer, guard) = if destination == Path::new("-") {
        tracing_appender::non_blocking(io::stderr())
    } else {
        let file_name = destination
            .file_name()
            .with_context(|| format!("Invalid diagnostic log path: {}", destination.display()))?;
        let dir = destination.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name.to_string_lossy())
            .build(dir)
            .with_context(|| format!("Failed to open diagnostic log {}", destination.display()))?;
        tracing_appender::non_blocking(appender)
    };

    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install diagnostic logger: {}", e))?;

    Ok(guard)
}
