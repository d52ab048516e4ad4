//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! command-line arguments.

use pricer_models::models::{PricingModelEnum, UnknownModelError};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Largest number of decimals accepted for table output.
pub const MAX_PRECISION: usize = 12;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown output format name
    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    /// Precision outside 0..=MAX_PRECISION
    #[error("Invalid precision: {0}. Must be at most {max}", max = MAX_PRECISION)]
    InvalidPrecision(usize),

    /// Unknown default model
    #[error("Invalid default model: {0}")]
    InvalidModel(#[from] UnknownModelError),

    /// Config file unreadable or malformed
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable present but unparsable
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose
    Trace,
    /// Configuration and pricing events
    Debug,
    /// Model selection
    Info,
    /// Warnings only
    #[default]
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How the pricing report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable echo of inputs and results
    #[default]
    Table,
    /// One JSON object on stdout
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Model used when `--model` is not given
    #[serde(deserialize_with = "deserialize_from_str")]
    pub default_model: PricingModelEnum,
    /// Output format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub output_format: OutputFormat,
    /// Decimals printed in table output
    pub precision: usize,
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_model: PricingModelEnum::black_scholes(),
            output_format: OutputFormat::Table,
            precision: 6,
            log_level: LogLevel::Warn,
        }
    }
}

/// Default model override
pub const ENV_MODEL: &str = "BSM_MODEL";
/// Output format override
pub const ENV_OUTPUT_FORMAT: &str = "BSM_OUTPUT_FORMAT";
/// Precision override
pub const ENV_PRECISION: &str = "BSM_PRECISION";
/// Log level override
pub const ENV_LOG_LEVEL: &str = "BSM_LOG_LEVEL";

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Overlay variables obtained through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup(ENV_MODEL) {
            self.default_model = model.parse()?;
        }

        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output_format = format.parse()?;
        }

        if let Some(precision) = lookup(ENV_PRECISION) {
            self.precision = precision
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}={}", ENV_PRECISION, precision)))?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.parse()?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(format) = &cli.output_format {
            self.output_format = format.parse()?;
        }
        if let Some(precision) = cli.precision {
            self.precision = precision;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.parse()?;
        } else if cli.verbose && self.log_level != LogLevel::Trace {
            self.log_level = LogLevel::Debug;
        }

        Ok(())
    }
}

/// Configuration-related CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Output format override
    pub output_format: Option<String>,
    /// Precision override
    pub precision: Option<usize>,
    /// Log level override
    pub log_level: Option<String>,
    /// Shorthand for debug logging
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an injectable environment
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
