//! Configuration data structures.
//!
//! Every field has a default from [`super::defaults`], and unknown fields are
//! rejected during deserialization (`#[serde(deny_unknown_fields)]`).

use super::defaults;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Settings of the logging subsystem.
///
/// ```
/// use rectangles_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let config: LoggingConfig = toml::from_str(r#"
/// level = "debug"
/// file_path = "/var/log/rectangles.log"
/// "#).unwrap();
/// assert_eq!(config.level, "debug");
/// assert_eq!(config.file_path, Some(PathBuf::from("/var/log/rectangles.log")));
/// assert_eq!(config.format, "text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error` (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths are resolved against the
    /// application's state directory during validation.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// `text` or `json`.
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    /// Aligned, human-readable tables.
    Table,
    /// The serialized report.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid output format: '{s}'. Must be one of table, json."
            ))),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        })
    }
}

/// When table output uses ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ColorChoice {
    /// Only when stdout is a terminal.
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves the choice against whether the target is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl FromStr for ColorChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid color choice: '{s}'. Must be one of auto, always, never."
            ))),
        }
    }
}

impl TryFrom<String> for ColorChoice {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Settings of result rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "defaults::default_output_format")]
    pub format: OutputFormat,
    /// Fractional digits printed for numbers in table output, at most
    /// [`defaults::MAX_PRECISION`].
    #[serde(default = "defaults::default_precision")]
    pub precision: usize,
    #[serde(default = "defaults::default_color")]
    pub color: ColorChoice,
}

impl Default for OutputConfig {
    fn default() -> Self {
        defaults::default_output_config()
    }
}

/// Root configuration.
///
/// ```
/// use rectangles_core::config::{CoreConfig, OutputFormat};
///
/// let config: CoreConfig = toml::from_str(r#"
/// [logging]
/// level = "info"
///
/// [output]
/// precision = 2
/// "#).unwrap();
/// assert_eq!(config.logging.level, "info");
/// assert_eq!(config.output.precision, 2);
/// assert_eq!(config.output.format, OutputFormat::Table);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
