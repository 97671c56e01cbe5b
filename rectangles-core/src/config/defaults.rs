//! Default configuration values, referenced from `#[serde(default = ...)]`.

use super::types::{ColorChoice, LoggingConfig, OutputConfig, OutputFormat};
use std::path::PathBuf;

/// Largest number of fractional digits the table renderer prints.
pub const MAX_PRECISION: usize = 17;

pub(crate) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// `"warn"`.
pub(crate) fn default_log_level() -> String {
    "warn".to_string()
}

pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    None
}

pub(crate) fn default_log_format() -> String {
    "text".to_string()
}

pub(crate) fn default_output_config() -> OutputConfig {
    OutputConfig {
        format: default_output_format(),
        precision: default_precision(),
        color: default_color(),
    }
}

pub(crate) fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

pub(crate) fn default_precision() -> usize {
    6
}

pub(crate) fn default_color() -> ColorChoice {
    ColorChoice::Auto
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_defaults() {
        let config = default_logging_config();
        assert_eq!(config.level, "warn");
        assert_eq!(config.file_path, None);
        assert_eq!(config.format, "text");
    }

    #[test]
    fn output_defaults() {
        let config = default_output_config();
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.precision, 6);
        assert!(config.precision <= MAX_PRECISION);
        assert_eq!(config.color, ColorChoice::Auto);
    }
}
