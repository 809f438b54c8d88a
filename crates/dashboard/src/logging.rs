//! Logging setup for embedding hosts
//!
//! Logs to a file under the dashboard data directory plus stderr.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::storage::default_data_root;

/// Initialize logging with file output.
///
/// Returns a guard that must be held for the lifetime of the host so logs are
/// flushed.
pub fn init_logging() -> WorkerGuard {
    let log_dir = default_data_root().join("logs");
    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&log_dir, "csa-dashboard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,csa_dashboard=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(true))
        .init();

    tracing::info!("logging initialized, log directory: {:?}", log_dir);

    guard
}
