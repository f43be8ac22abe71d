//! # Layout Error Types
//!
//! Only configuration can fail. Placement failures are never errors:
//! a candidate that cannot be placed is simply left out of the world.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing a layout run.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A configuration value is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`LayoutConfig`](crate::LayoutConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
