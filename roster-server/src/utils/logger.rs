//! Logging Infrastructure
//!
//! Structured logging setup for development and production.

use std::path::Path;

/// Initialize the logger
///
/// The level filter comes from `RUST_LOG`; file output is enabled when
/// `LOG_DIR` points at an existing directory.
pub fn init_logger() {
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_dir.as_deref());
}

/// Initialize the logger with optional daily-rolling file output
pub fn init_logger_with_file(log_dir: Option<&str>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "roster_server=info,tower_http=info".into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "roster-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
