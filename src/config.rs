//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the customers/transactions document comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetConfig {
    /// JSON file to load; the bundled dataset is used when unset
    pub path: Option<String>,
}

/// Chart series styling and axis settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_series_label")]
    pub series_label: String,

    #[serde(default = "default_border_color")]
    pub border_color: String,

    #[serde(default = "default_background_color")]
    pub background_color: String,

    #[serde(default = "default_x_title")]
    pub x_title: String,

    #[serde(default = "default_y_title")]
    pub y_title: String,

    #[serde(default = "default_time_unit")]
    pub time_unit: String,

    #[serde(default = "default_date_parser")]
    pub date_parser: String,

    #[serde(default = "default_tooltip_format")]
    pub tooltip_format: String,
}

fn default_series_label() -> String {
    "Transaction Amount".to_string()
}

fn default_border_color() -> String {
    "rgba(75, 192, 192, 1)".to_string()
}

fn default_background_color() -> String {
    "rgba(75, 192, 192, 0.2)".to_string()
}

fn default_x_title() -> String {
    "Date".to_string()
}

fn default_y_title() -> String {
    "Transaction Amount".to_string()
}

fn default_time_unit() -> String {
    "day".to_string()
}

fn default_date_parser() -> String {
    "YYYY-MM-DD".to_string()
}

fn default_tooltip_format() -> String {
    "ll".to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            series_label: default_series_label(),
            border_color: default_border_color(),
            background_color: default_background_color(),
            x_title: default_x_title(),
            y_title: default_y_title(),
            time_unit: default_time_unit(),
            date_parser: default_date_parser(),
            tooltip_format: default_tooltip_format(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let search = Self::search_default();
        search.log();
        search.config
    }

    /// Search the default locations without logging.
    ///
    /// The outcome is returned so callers can report it once a subscriber
    /// is installed.
    pub fn search_default() -> ConfigSearch {
        let candidates: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("ledgerview").join("config.toml")),
            Some(PathBuf::from("./ledgerview.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::search(&candidates)
    }

    /// First candidate that exists and loads; defaults plus env otherwise
    pub fn search(candidates: &[PathBuf]) -> ConfigSearch {
        let mut failures = Vec::new();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return ConfigSearch {
                        config,
                        source: Some(path.clone()),
                        failures,
                    }
                }
                Err(e) => failures.push((path.clone(), e)),
            }
        }

        ConfigSearch {
            config: Self::from_env(),
            source: None,
            failures,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("LEDGERVIEW_DATASET") {
            self.dataset.path = Some(path);
        }

        if let Ok(level) = std::env::var("LEDGERVIEW_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LEDGERVIEW_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Outcome of searching the default config locations
#[derive(Debug)]
pub struct ConfigSearch {
    pub config: Config,
    /// File the config came from; `None` when defaults were used
    pub source: Option<PathBuf>,
    /// Candidates that exist but failed to load
    pub failures: Vec<(PathBuf, ConfigError)>,
}

impl ConfigSearch {
    pub fn log(&self) {
        for (path, e) in &self.failures {
            tracing::warn!("Failed to load config from {:?}: {}", path, e);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Ledgerview Configuration
#
# Environment variables override these settings:
# - LEDGERVIEW_DATASET
# - LEDGERVIEW_LOG_LEVEL
# - LEDGERVIEW_LOG_FORMAT

[dataset]
# JSON file with "customers" and "transactions" arrays.
# Leave unset to use the bundled dataset.
# path = "./data/db.json"

[chart]
series_label = "Transaction Amount"
border_color = "rgba(75, 192, 192, 1)"
background_color = "rgba(75, 192, 192, 0.2)"

# Axis titles
x_title = "Date"
y_title = "Transaction Amount"

# Time axis: one tick per day, dates parsed as YYYY-MM-DD
time_unit = "day"
date_parser = "YYYY-MM-DD"
tooltip_format = "ll"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json
format = "pretty"
"#
    .to_string()
}
