//! Logging configuration and subscriber setup

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{SplitXError, SplitXResult};

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// General information
    #[default]
    Info,
    /// Debug information
    Debug,
    /// Very verbose debug information
    Trace,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = SplitXError;

    fn from_str(level_str: &str) -> Result<Self, Self::Err> {
        match level_str.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(SplitXError::InvalidArgument {
                message: format!(
                    "Invalid log level: {}. Valid levels: trace, debug, info, warn, error",
                    level_str
                ),
            }),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Pretty,
    /// Compact text format
    Compact,
    /// JSON format for structured logging
    Json,
}

impl FromStr for LogFormat {
    type Err = SplitXError;

    fn from_str(format_str: &str) -> Result<Self, Self::Err> {
        match format_str.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(SplitXError::InvalidArgument {
                message: format!(
                    "Invalid log format: {}. Valid formats: pretty, compact, json",
                    format_str
                ),
            }),
        }
    }
}

/// Logging configuration options
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Global log level, overridden by `RUST_LOG` when set
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: LogLevel, format: LogFormat) -> Self {
        Self { level, format }
    }

    /// Filter honouring `RUST_LOG` first, then the configured level
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.as_filter()))
    }

    /// Install the global subscriber; logs go to stderr
    pub fn initialize(&self) -> SplitXResult<()> {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr);

        let result = match self.format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Compact => builder.compact().try_init(),
            LogFormat::Json => builder.json().try_init(),
        };

        result.map_err(|e| SplitXError::LoggingInit {
            message: e.to_string(),
        })?;

        tracing::debug!(
            level = self.level.as_filter(),
            format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }

    /// Log system information
    pub fn log_system_info(&self) {
        tracing::info!("=== SplitX Video Splitter ===");
        tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

        #[cfg(target_os = "macos")]
        tracing::info!("Platform: macOS");
        #[cfg(target_os = "linux")]
        tracing::info!("Platform: Linux");
        #[cfg(target_os = "windows")]
        tracing::info!("Platform: Windows");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parse() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" Compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
