//! Error handling for the rectangles core library.
//!
//! Errors are defined with the `thiserror` crate. The crate-level type is
//! [`CoreError`], which wraps the more specific [`ConfigError`] and
//! [`LoggingError`]. [`InvalidRectangleError`] stands on its own: it is the
//! only failure of the geometry types.
//!
//! Geometry operations never fail once a [`crate::Rectangle`] exists; the only
//! domain failure is rejecting a rectangle at construction time.
//!
//! # Examples
//!
//! ```
//! use rectangles_core::{Point, Rectangle, Size};
//!
//! let err = Rectangle::new(Point::new(0.0, 0.0), Size::new(0.0, 1.0)).unwrap_err();
//! assert!(err.violations().contains_path("size.width"));
//! ```

use crate::validation::Violations;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the rectangles library.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while setting up the logging system.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Filesystem failures not covered by a more specific variant, such as
    /// creating the directory for a log file.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Error type for configuration-related operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but holds unacceptable values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g. the XDG config home) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging setup.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The global subscriber could not be installed, or the config was unusable.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// A level filter directive could not be parsed.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),
}

/// Returned by [`crate::Rectangle::new`] when the width and/or height is not
/// strictly positive.
///
/// Carries one entry per offending dimension, keyed `size.width` and
/// `size.height`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{violations}")]
pub struct InvalidRectangleError {
    violations: Violations,
}

impl InvalidRectangleError {
    pub(crate) fn new(violations: Violations) -> Self {
        Self { violations }
    }

    /// The invariant violations, keyed by field path.
    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    pub fn into_violations(self) -> Violations {
        self.violations
    }
}
