//! Configuration loading errors.

use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    /// Reading the file failed.
    #[error("failed to read config file: {0}")]
    Io(String),

    /// The file was not valid YAML for the expected schema.
    #[error("failed to parse config: {0}")]
    Parse(String),
}
