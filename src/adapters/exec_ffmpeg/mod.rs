//! FFmpeg execution adapter
//!
//! Extracts one clip per invocation with seek-before-input, so stream copy
//! starts at the nearest preceding keyframe.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFmpeg-based execution adapter
pub struct FFmpegAdapter {
    binary: String,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter using `ffmpeg` from `PATH`
    pub fn new() -> Self {
        Self::with_binary("ffmpeg")
    }

    /// Create adapter for a specific ffmpeg executable
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Command-line arguments for one clip
    pub fn build_args(
        input: &Path,
        interval: &Interval,
        destination: &Path,
        options: &ExtractOptions,
    ) -> Vec<String> {
        let mut args = vec![
            "-y".to_string(),
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-ss".to_string(),
            interval.start.to_string(),
            "-i".to_string(),
            input.to_string_lossy().to_string(),
            "-t".to_string(),
            interval.duration().to_string(),
        ];

        if options.mute {
            args.push("-an".to_string());
        }

        args.push("-c:v".to_string());
        match options.codec {
            VideoCodec::Copy => args.push("copy".to_string()),
            VideoCodec::Reencode => args.push(options.encoder.clone()),
        }

        args.extend([
            "-avoid_negative_ts".to_string(),
            "make_zero".to_string(),
            "-fflags".to_string(),
            "+discardcorrupt".to_string(),
            destination.to_string_lossy().to_string(),
        ]);

        args
    }
}

impl Default for FFmpegAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExtractPort for FFmpegAdapter {
    async fn extract(
        &self,
        input: &Path,
        interval: &Interval,
        destination: &Path,
        options: &ExtractOptions,
    ) -> bool {
        let args = Self::build_args(input, interval, destination, options);
        debug!(binary = %self.binary, ?args, "Running ffmpeg");

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => true,
            Ok(output) => {
                let failure = DomainError::ExtractionFailure(format!(
                    "{} exited with {:?}: {}",
                    self.binary,
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr).trim()
                ));
                warn!(destination = %destination.display(), error = %failure);
                false
            }
            Err(e) => {
                let failure = DomainError::ExtractionFailure(format!(
                    "failed to launch {}: {}",
                    self.binary, e
                ));
                warn!(destination = %destination.display(), error = %failure);
                false
            }
        }
    }
}
