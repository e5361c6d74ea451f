//! Error handling module for SplitX

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for SplitX operations outside the domain core
#[derive(Error, Debug)]
pub enum SplitXError {
    /// Invalid command-line or configuration value
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Environment variable override could not be parsed
    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidEnvOverride { name: String, value: String },

    /// Tracing subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    LoggingInit { message: String },

    /// Every input file was skipped
    #[error("No input file could be processed ({skipped} skipped)")]
    AllFilesFailed { skipped: usize },

    /// Domain error
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type alias for SplitX operations
pub type SplitXResult<T> = std::result::Result<T, SplitXError>;
