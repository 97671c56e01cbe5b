//! Locating, parsing and validating the configuration file.
//!
//! [`ConfigLoader::load`] looks for the file in this order:
//!
//! 1. An explicitly given path, which must exist.
//! 2. The path in the [`CONFIG_ENV_VAR`] environment variable, which must exist.
//! 3. `config.toml` in the application configuration directory. A missing
//!    file here means defaults.
//!
//! After parsing, [`ConfigLoader::validate_config`] normalises and checks the
//! values and resolves a relative log file path against the state directory.

use super::defaults::MAX_PRECISION;
use super::paths::{get_app_config_dir, get_app_state_dir};
use super::types::CoreConfig;
use crate::error::{ConfigError, CoreError};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming a configuration file to load.
pub const CONFIG_ENV_VAR: &str = "RECTANGLES_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Namespace for configuration loading.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ReadError`] if an explicit or environment-provided file
    ///   cannot be read, or the default file exists but cannot be read.
    /// - [`ConfigError::ParseError`] for malformed TOML or unknown fields.
    /// - [`ConfigError::ValidationError`] for out-of-range values.
    /// - [`ConfigError::DirectoryUnavailable`] if a platform directory is needed
    ///   but cannot be determined.
    pub fn load(explicit: Option<&Path>) -> Result<CoreConfig, CoreError> {
        let env_path = env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let content = match (explicit, env_path) {
            (Some(path), _) => Some(Self::read_required(path)?),
            (None, Some(path)) => Some(Self::read_required(&path)?),
            (None, None) => Self::read_optional(&Self::default_config_path()?)?,
        };

        match content {
            Some(content) => Self::load_from_str(&content),
            None => {
                tracing::debug!("no configuration file found, using defaults");
                let mut config = CoreConfig::default();
                Self::validate_config(&mut config)?;
                Ok(config)
            }
        }
    }

    /// Parses and validates configuration held in memory.
    pub fn load_from_str(content: &str) -> Result<CoreConfig, CoreError> {
        let mut config: CoreConfig = toml::from_str(content).map_err(ConfigError::ParseError)?;
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    /// `config.toml` inside the application configuration directory.
    pub fn default_config_path() -> Result<PathBuf, CoreError> {
        get_app_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    fn read_required(path: &Path) -> Result<String, CoreError> {
        tracing::debug!(path = %path.display(), "reading configuration file");
        fs::read_to_string(path).map_err(|source| {
            CoreError::Config(ConfigError::ReadError {
                path: path.to_path_buf(),
                source,
            })
        })
    }

    fn read_optional(path: &Path) -> Result<Option<String>, CoreError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "read configuration file");
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CoreError::Config(ConfigError::ReadError {
                path: path.to_path_buf(),
                source,
            })),
        }
    }

    /// Normalises and checks `config` in place.
    ///
    /// Log level and format are lower-cased and must be known values, the
    /// precision must not exceed [`MAX_PRECISION`], and a relative log file
    /// path becomes absolute under the state directory. Nothing is created on
    /// disk; the logging layer creates the log directory when it opens the file.
    pub fn validate_config(config: &mut CoreConfig) -> Result<(), CoreError> {
        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                config.logging.level
            ))
            .into());
        }
        config.logging.level = level;

        let format = config.logging.format.to_lowercase();
        if !LOG_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log format: '{}'. Must be one of text, json.",
                config.logging.format
            ))
            .into());
        }
        config.logging.format = format;

        if config.output.precision > MAX_PRECISION {
            return Err(ConfigError::ValidationError(format!(
                "Invalid output precision: {}. Must be at most {MAX_PRECISION}.",
                config.output.precision
            ))
            .into());
        }

        if let Some(path) = config.logging.file_path.take() {
            let path = if path.is_absolute() {
                path
            } else {
                resolve_log_path(&path, &get_app_state_dir()?)
            };
            config.logging.file_path = Some(path);
        }
        Ok(())
    }
}

fn resolve_log_path(path: &Path, state_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        state_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, OutputFormat};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, content).expect("failed to write temp config file");
        path
    }

    #[test]
    fn load_from_str_applies_defaults() {
        let config = ConfigLoader::load_from_str("").unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn load_from_str_normalises_case() {
        let config = ConfigLoader::load_from_str(
            "[logging]\nlevel = \"DEBUG\"\nformat = \"Json\"\n[output]\ncolor = \"ALWAYS\"\n",
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.output.color, ColorChoice::Always);
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let err = ConfigLoader::load_from_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
        match err {
            CoreError::Config(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("Invalid log level: 'loud'"), "{msg}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_log_format_is_rejected() {
        let err = ConfigLoader::load_from_str("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::ValidationError(_))));
    }

    #[test]
    fn precision_above_maximum_is_rejected() {
        assert!(ConfigLoader::load_from_str("[output]\nprecision = 17\n").is_ok());
        let err = ConfigLoader::load_from_str("[output]\nprecision = 18\n").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::ValidationError(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ConfigLoader::load_from_str("[logging\nlevel = ").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::ParseError(_))));
        let err = ConfigLoader::load_from_str("[output]\nformat = \"yaml\"\n").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn load_reads_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[output]\nformat = \"json\"\nprecision = 2\n");
        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.precision, 2);
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        match ConfigLoader::load(Some(&path)).unwrap_err() {
            CoreError::Config(ConfigError::ReadError { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_optional_file_means_none() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigLoader::read_optional(&dir.path().join(CONFIG_FILE_NAME)).unwrap().is_none());
        let path = write_config(&dir, "[logging]\n");
        assert_eq!(ConfigLoader::read_optional(&path).unwrap().as_deref(), Some("[logging]\n"));
    }

    #[test]
    fn validation_leaves_the_filesystem_untouched() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("logs").join("nested").join("rectangles.log");
        let toml = format!("[logging]\nfile_path = {:?}\n", log_path.to_string_lossy());
        let config = ConfigLoader::load_from_str(&toml).unwrap();
        assert_eq!(config.logging.file_path, Some(log_path.clone()));
        assert!(!dir.path().join("logs").exists());
    }

    #[test]
    fn relative_log_path_resolves_against_state_dir() {
        let state_dir = Path::new("/var/lib/rectangles");
        assert_eq!(
            resolve_log_path(Path::new("logs/app.log"), state_dir),
            PathBuf::from("/var/lib/rectangles/logs/app.log")
        );
        assert_eq!(resolve_log_path(Path::new("/tmp/app.log"), state_dir), PathBuf::from("/tmp/app.log"));
    }
}
