//! FFprobe adapter for media duration probing
//!
//! Runs `ffprobe` and reads the container duration from its stdout.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;
use crate::ports::*;

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    binary: String,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter using `ffprobe` from `PATH`
    pub fn new() -> Self {
        Self::with_binary("ffprobe")
    }

    /// Create adapter for a specific ffprobe executable
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Arguments printing only the format duration, one bare number
    pub fn build_args(file_path: &Path) -> Vec<String> {
        vec![
            "-v".to_string(),
            "error".to_string(),
            "-show_entries".to_string(),
            "format=duration".to_string(),
            "-of".to_string(),
            "default=noprint_wrappers=1:nokey=1".to_string(),
            file_path.to_string_lossy().to_string(),
        ]
    }

    /// Parse ffprobe's stdout into a positive duration
    pub fn parse_duration(stdout: &str) -> Result<f64, DomainError> {
        let raw = stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| DomainError::ProbeError("ffprobe printed no duration".to_string()))?;

        let duration: f64 = raw
            .parse()
            .map_err(|_| DomainError::ProbeError(format!("Unparseable duration: {}", raw)))?;

        if !duration.is_finite() || duration <= 0.0 {
            return Err(DomainError::ProbeError(format!(
                "Invalid video duration: {}",
                duration
            )));
        }

        Ok(duration)
    }
}

impl Default for FFprobeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_duration(&self, file_path: &Path) -> Result<f64, DomainError> {
        let output = Command::new(&self.binary)
            .args(Self::build_args(file_path))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                DomainError::ProbeError(format!("Failed to run {}: {}", self.binary, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DomainError::ProbeError(format!(
                "{} failed for {}: {}",
                self.binary,
                file_path.display(),
                stderr.trim()
            )));
        }

        let duration = Self::parse_duration(&String::from_utf8_lossy(&output.stdout))?;
        debug!(file = %file_path.display(), duration, "Probed duration");
        Ok(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(FFprobeAdapter::parse_duration("20.500000\n").unwrap(), 20.5);
        assert_eq!(FFprobeAdapter::parse_duration("\n  63.2\n").unwrap(), 63.2);
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(matches!(
            FFprobeAdapter::parse_duration("N/A"),
            Err(DomainError::ProbeError(_))
        ));
        assert!(FFprobeAdapter::parse_duration("").is_err());
        assert!(FFprobeAdapter::parse_duration("0.0").is_err());
        assert!(FFprobeAdapter::parse_duration("-3").is_err());
    }

    #[test]
    fn test_build_args_ends_with_path() {
        let args = FFprobeAdapter::build_args(Path::new("in/video.mp4"));
        assert_eq!(args.last().map(String::as_str), Some("in/video.mp4"));
        assert!(args.contains(&"format=duration".to_string()));
    }

    #[tokio::test]
    async fn test_missing_binary_is_probe_error() {
        let adapter = FFprobeAdapter::with_binary("splitx-no-such-ffprobe");
        let result = adapter.probe_duration(Path::new("video.mp4")).await;
        assert!(matches!(result, Err(DomainError::ProbeError(_))));
    }
}
