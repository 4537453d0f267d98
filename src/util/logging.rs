use std::path::Path;

use anyhow::{Result, anyhow};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter directive for the crate's own targets.
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "concert_organ=debug,warn"
    } else {
        "concert_organ=info,warn"
    }
}

/// Initialize the logging system with tracing.
///
/// If `log_dir` is provided, logs are also written to a daily-rotated file
/// in that directory. The `verbose` flag enables debug logs, which include
/// dropped triggers and voice releases.
pub fn init_logging(log_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter_directive(verbose)));

    if let Some(dir) = log_dir {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "concert-organ.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // The guard flushes on drop; logging lives for the whole process.
        std::mem::forget(guard);

        registry
            .with(fmt::layer().with_target(true))
            .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
    } else {
        registry
            .with(fmt::layer().with_target(true))
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
    }

    Ok(())
}
