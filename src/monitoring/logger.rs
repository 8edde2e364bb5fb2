use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use crate::config::MonitoringConfig;

/// Install the global tracing subscriber.
///
/// Logs go to stdout, or are appended to `log_path` without colours when set.
pub fn init_logging(config: &MonitoringConfig) -> Result<()> {
    match &config.log_path {
        Some(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => tracing_subscriber::fmt::init(),
    }

    Ok(())
}

fn open_log_file(path: &str) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path))
}
