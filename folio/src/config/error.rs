//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading `folio.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config in '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A setting holds an unusable value.
    #[error("Invalid setting '{key}': {message}")]
    ValidationError { key: String, message: String },

    /// An explicitly requested config file does not exist.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },
}
