use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Sink path used when no config or CLI override names one.
pub const DEFAULT_OUTPUT_PATH: &str = "logs/ecommerce.log";
/// Code-unit name written in the `[module: ...]` field of every record.
pub const DEFAULT_ORIGIN: &str = "script";
/// Longest pause allowed between two events (one day).
pub const MAX_DELAY_SECONDS: f64 = 86_400.0;

/// Error while loading or parsing a config file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config io error: {err}"),
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Optional RNG seed for deterministic output.
    pub seed: Option<u64>,
    /// Inter-event delay bounds.
    #[serde(default)]
    pub traffic: TrafficConfig,
    /// Output sink configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Loads a config file from TOML and validates it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects delay bounds the pacer cannot sample from and an empty origin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let TrafficConfig {
            min_delay_seconds: min,
            max_delay_seconds: max,
        } = self.traffic;
        if !min.is_finite() || min < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "traffic.min_delay_seconds must be a non-negative number, got {min}"
            )));
        }
        if !max.is_finite() || max < min {
            return Err(ConfigError::Invalid(format!(
                "traffic.max_delay_seconds must be >= min_delay_seconds ({min}), got {max}"
            )));
        }
        if max > MAX_DELAY_SECONDS {
            return Err(ConfigError::Invalid(format!(
                "traffic.max_delay_seconds must be at most {MAX_DELAY_SECONDS}, got {max}"
            )));
        }
        if self.output.origin.trim().is_empty() {
            return Err(ConfigError::Invalid("output.origin must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Controls how long the loop sleeps between events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrafficConfig {
    #[serde(default = "default_min_delay")]
    pub min_delay_seconds: f64,
    #[serde(default = "default_max_delay")]
    pub max_delay_seconds: f64,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            min_delay_seconds: default_min_delay(),
            max_delay_seconds: default_max_delay(),
        }
    }
}

fn default_min_delay() -> f64 {
    0.5
}

fn default_max_delay() -> f64 {
    2.0
}

/// Output sink configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File the records are appended to.
    #[serde(default = "default_output_path")]
    pub path: String,
    /// Write to stdout instead of `path`.
    #[serde(default)]
    pub console: bool,
    /// Name written in the `[module: ...]` field.
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Output format selection.
    #[serde(default)]
    pub format: FormatConfig,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            console: false,
            origin: default_origin(),
            format: FormatConfig::default(),
        }
    }
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormatConfig {
    #[default]
    Text,
    Jsonl,
}
