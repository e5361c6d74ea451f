//! Configuration hierarchy: CLI > environment > file > defaults

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::model::{DurationRange, ExtractOptions, VideoCodec};
use crate::domain::rules::PlanningRules;
use crate::utils::Utils;

pub mod loader;

pub use loader::{
    load_config_file, parse_config_toml, ConfigLoader, CONFIG_SEARCH_PATHS, ENV_PREFIX,
};

/// Extensions processed when none are configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "webm"];

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Folder scanned for input videos
    pub input_folder: PathBuf,
    /// Root folder for extracted clips
    pub output_folder: PathBuf,
    pub min_clip_duration: f64,
    pub max_clip_duration: f64,
    pub min_gap: f64,
    pub max_gap: f64,
    /// Drop audio from clips
    pub mute_audio: bool,
    pub video_codec: VideoCodec,
    /// Encoder used when `video_codec` is `reencode`
    pub reencode_encoder: String,
    /// Parallel extractions; 0 = available parallelism
    pub max_threads: usize,
    /// Input extensions, without the dot
    pub extensions: Vec<String>,
    /// Fixed seed for reproducible plans
    pub seed: Option<u64>,
    /// Put each input's clips in `<output>/<input stem>/`
    pub per_file_subfolder: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from("./input"),
            output_folder: PathBuf::from("./output_clips"),
            min_clip_duration: 3.0,
            max_clip_duration: 7.0,
            min_gap: 5.0,
            max_gap: 10.0,
            mute_audio: true,
            video_codec: VideoCodec::Copy,
            reencode_encoder: "libx264".to_string(),
            max_threads: 0,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            seed: None,
            per_file_subfolder: true,
        }
    }
}

impl SplitterConfig {
    pub fn clip_range(&self) -> DurationRange {
        DurationRange {
            min: self.min_clip_duration,
            max: self.max_clip_duration,
        }
    }

    pub fn gap_range(&self) -> DurationRange {
        DurationRange {
            min: self.min_gap,
            max: self.max_gap,
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            mute: self.mute_audio,
            codec: self.video_codec,
            encoder: self.reencode_encoder.clone(),
        }
    }

    /// Worker count with `0` resolved to the host's parallelism
    pub fn worker_count(&self) -> usize {
        Utils::resolve_parallelism(self.max_threads)
    }

    /// Validate configuration before any work starts
    pub fn validate(&self) -> Result<(), DomainError> {
        PlanningRules::validate_ranges(&self.clip_range(), &self.gap_range())?;

        if self.extensions.iter().all(|e| e.trim_start_matches('.').is_empty()) {
            return Err(DomainError::InvalidConfig(
                "At least one input extension must be configured".to_string(),
            ));
        }

        if self.video_codec == VideoCodec::Reencode && self.reencode_encoder.trim().is_empty() {
            return Err(DomainError::InvalidConfig(
                "An encoder is required when re-encoding".to_string(),
            ));
        }

        Ok(())
    }
}

/// Values given on the command line; `None` keeps the lower layer's value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input_folder: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    pub min_clip_duration: Option<f64>,
    pub max_clip_duration: Option<f64>,
    pub min_gap: Option<f64>,
    pub max_gap: Option<f64>,
    pub mute_audio: Option<bool>,
    pub video_codec: Option<VideoCodec>,
    pub reencode_encoder: Option<String>,
    pub max_threads: Option<usize>,
    pub extensions: Option<Vec<String>>,
    pub seed: Option<u64>,
    pub per_file_subfolder: Option<bool>,
}

impl ConfigOverrides {
    /// Apply every set value, returning how many were applied
    pub fn apply(self, config: &mut SplitterConfig) -> usize {
        let mut applied = 0;

        macro_rules! set {
            ($field:ident) => {
                if let Some(value) = self.$field {
                    config.$field = value;
                    applied += 1;
                }
            };
        }

        set!(input_folder);
        set!(output_folder);
        set!(min_clip_duration);
        set!(max_clip_duration);
        set!(min_gap);
        set!(max_gap);
        set!(mute_audio);
        set!(video_codec);
        set!(reencode_encoder);
        set!(max_threads);
        set!(extensions);
        set!(per_file_subfolder);

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
            applied += 1;
        }

        applied
    }
}
