use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE, DEFAULT_LOG_FILTER,
    INVALID_NAME_MESSAGE,
};
use crate::error::{NumerologyError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub messages: MessagesConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Text shown in place of a reading
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub invalid_name: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            invalid_name: INVALID_NAME_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_breakdown: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: String,
    pub file_name: String,
    pub filter: String,
    pub file_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_LOG_DIR.to_string(),
            file_name: DEFAULT_LOG_FILE.to_string(),
            filter: DEFAULT_LOG_FILTER.to_string(),
            file_enabled: false,
        }
    }
}

impl Config {
    /// Load `.env`, then the file named by `NUMEROLOGY_CONFIG` or `numerology.toml`
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        let config_path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&config_path)
    }

    /// Load a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), "loaded config file");
                Self::from_toml_str(&content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(NumerologyError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.messages.invalid_name.trim().is_empty() {
            return Err(NumerologyError::Config(
                "messages.invalid_name must not be empty".to_string(),
            ));
        }
        Ok(config)
    }
}
