//! Configuration parsing
//!
//! Reads settings from `~/.model_inflect/config.toml` (or `$MODEL_INFLECT_HOME/config.toml`)

use inflect_cases::UnknownCaseError;
use inflect_engine::InflectorOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Error type for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid default_cases: {0}")]
    UnknownCase(#[from] UnknownCaseError),

    #[error("Config not found at: {0}")]
    NotFound(String),
}

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InflectConfig {
    #[serde(default)]
    pub inflect: InflectSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl InflectConfig {
    pub fn inflector_options(&self) -> InflectorOptions {
        InflectorOptions {
            strict: self.inflect.strict,
        }
    }
}

/// `[inflect]` section
#[derive(Debug, Clone, Deserialize)]
pub struct InflectSection {
    /// Lexicon file used when `--lexicon` is not given
    #[serde(default)]
    pub lexicon: Option<PathBuf>,

    /// Fail instead of keeping words that cannot be inflected
    #[serde(default)]
    pub strict: bool,

    /// Cases used by `inflect` when none are requested
    #[serde(default = "default_cases")]
    pub default_cases: Vec<String>,
}

impl Default for InflectSection {
    fn default() -> Self {
        Self {
            lexicon: None,
            strict: false,
            default_cases: default_cases(),
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Append logs to `<home>/logs/model-inflect.log`
    #[serde(default = "default_log_file")]
    pub file: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

fn default_cases() -> Vec<String> {
    inflect_cases::default_codes()
        .into_iter()
        .map(str::to_string)
        .collect()
}
fn default_log_file() -> bool { true }

/// Load configuration from a file; a missing file yields defaults.
pub fn load_config(config_path: &Path) -> Result<InflectConfig> {
    if !config_path.exists() {
        return Ok(InflectConfig::default());
    }

    let content = std::fs::read_to_string(config_path)?;
    let config: InflectConfig = toml::from_str(&content)?;
    inflect_cases::lookup_all(&config.inflect.default_cases)?;

    Ok(config)
}

/// Load configuration from the default location
pub fn load_default_config() -> Result<InflectConfig> {
    let home = inflect_logging::inflect_home().map_err(|e| ConfigError::NotFound(e.to_string()))?;
    load_config(&home.join("config.toml"))
}
