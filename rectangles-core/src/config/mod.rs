//! Configuration of the logging subsystem and of result rendering.
//!
//! - [`types`]: the deserialized schema ([`CoreConfig`], [`LoggingConfig`], [`OutputConfig`]).
//! - [`defaults`]: values used for every field missing from the file.
//! - [`paths`]: platform directories resolved through `directories-next`.
//! - [`loader`]: locating, parsing and validating a TOML file ([`ConfigLoader`]).
//!
//! A configuration file is never required. When none is found the defaults
//! are validated and returned as if they had been read.
//!
//! ```
//! use rectangles_core::config::{ConfigLoader, OutputFormat};
//!
//! let config = ConfigLoader::load_from_str("[output]\nformat = \"JSON\"\n").unwrap();
//! assert_eq!(config.output.format, OutputFormat::Json);
//! assert_eq!(config.logging.level, "warn");
//! ```

pub mod defaults;
pub mod loader;
pub mod paths;
pub mod types;

pub use loader::{ConfigLoader, CONFIG_ENV_VAR};
pub use types::{ColorChoice, CoreConfig, LoggingConfig, OutputConfig, OutputFormat};
