//! Process-wide tracing setup.
//!
//! Every component writes to its own daily file under the configured log
//! directory (`serve.2024-01-21`, `cli.2024-01-21`); the server additionally
//! mirrors events to stderr.

use crate::config::{DEFAULT_LOG_LEVEL, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins over the configured level; an unparsable level falls back
/// to `info`.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

pub fn init_logging(component: &str, config: &LoggingConfig, to_stderr: bool) -> WorkerGuard {
    let log_dir = config.directory();
    let _ = std::fs::create_dir_all(&log_dir);

    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry()
        .with(build_filter(config))
        .with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    tracing::debug!("Logging {} to {}", component, log_dir.display());
    guard
}
