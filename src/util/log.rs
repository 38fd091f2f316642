use std::path::PathBuf;

use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::project_dirs;

pub const LOG_ENV: &str = "SHELFMOOD_LOG";
pub const LOG_FILE: &str = "shelfmood.log";

pub fn log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Logs go to a file since the terminal is owned by the UI.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;
    let log_file = std::fs::File::create(dir.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
