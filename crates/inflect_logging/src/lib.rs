//! Shared logging utilities for Model Inflect binaries.

use anyhow::{anyhow, Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const DEFAULT_LOG_FILTER: &str = "model_inflect=info,inflect_engine=warn,inflect_schema=info";

/// Environment variable overriding the application home directory.
pub const HOME_ENV: &str = "MODEL_INFLECT_HOME";

/// Logging configuration shared by Model Inflect binaries.
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    /// Log everything at debug level to stderr
    pub verbose: bool,
    /// Also append plain-text logs to `<home>/logs/<app_name>.log`
    pub log_to_file: bool,
}

/// Initialize tracing with stderr output and an optional log file.
///
/// If the log file cannot be opened, logging continues on stderr alone.
/// `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`].
pub fn init_logging(config: LogConfig<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let console_filter = if config.verbose {
        EnvFilter::new("debug")
    } else {
        filter.clone()
    };

    let file_layer = if config.log_to_file {
        match open_log_file(config.app_name) {
            Ok(file) => Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_filter(filter),
            ),
            Err(err) => {
                eprintln!("Warning: logging to stderr only: {:#}", err);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn open_log_file(app_name: &str) -> Result<File> {
    let path = ensure_logs_dir()
        .context("Failed to ensure log directory")?
        .join(format!("{}.log", sanitize_name(app_name)));
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Get the Model Inflect home directory: `$MODEL_INFLECT_HOME` or `~/.model_inflect`
pub fn inflect_home() -> Result<PathBuf> {
    if let Ok(override_path) = std::env::var(HOME_ENV) {
        return Ok(PathBuf::from(override_path));
    }
    dirs::home_dir()
        .map(|home| home.join(".model_inflect"))
        .ok_or_else(|| anyhow!("Could not determine home directory"))
}

/// Get the logs directory: `<home>/logs`
pub fn logs_dir() -> Result<PathBuf> {
    Ok(inflect_home()?.join("logs"))
}

/// Ensure the logs directory exists.
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir()?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create logs directory: {}", logs.display()))?;
    Ok(logs)
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' { ch } else { '_' })
        .collect()
}
