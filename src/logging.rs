// src/logging.rs

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};
use time::macros::format_description;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    self, EnvFilter, Layer, fmt::time::LocalTime, layer::SubscriberExt, util::SubscriberInitExt,
};

lazy_static! {
    static ref ENV_PREFIX: String = env!("CARGO_CRATE_NAME").to_uppercase();
    /// Overrides the log filter when `RUST_LOG` is unset.
    pub static ref LOG_LEVEL_ENV: String = format!("{}_LOGLEVEL", *ENV_PREFIX);
    /// Overrides the default data directory.
    pub static ref DATA_DIR_ENV: String = format!("{}_DATA", *ENV_PREFIX);
    static ref LOG_FILE_NAME: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "zerointel", env!("CARGO_PKG_NAME"))
}

/// `$ZEROINTEL_DATA`, else the platform's local data dir, else `./.data`.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV.as_str()) {
        return PathBuf::from(dir);
    }
    project_dirs()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".data"))
}

fn log_filter() -> EnvFilter {
    let directive = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_LEVEL_ENV.as_str()))
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")));
    EnvFilter::new(directive)
}

/// Sends every event to a log file in `directory`, truncated on start.
///
/// The terminal belongs to the TUI, so nothing goes to stdout or stderr.
pub fn initialize_logging(directory: &Path) -> Result<()> {
    std::fs::create_dir_all(directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE_NAME.as_str()))?;

    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_timer(timer)
        .with_target(false)
        .with_ansi(false)
        .with_filter(log_filter());

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
