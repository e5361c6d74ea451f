//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;
use clap_num::number_range;

use crate::config::ConfigOverrides;
use crate::domain::model::VideoCodec;

/// Upper bound accepted for `--jobs`
pub const MAX_JOBS: usize = 256;

fn parse_jobs(value: &str) -> Result<usize, String> {
    number_range(value, 0, MAX_JOBS)
}

fn parse_seconds(value: &str) -> Result<f64, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number of seconds", value))?;
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("`{}` must be a positive number of seconds", value));
    }
    Ok(seconds)
}

/// Clip and gap length flags shared by `split` and `plan`
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Minimum clip length in seconds
    #[arg(long, value_name = "SECONDS", value_parser = parse_seconds)]
    pub clip_min: Option<f64>,

    /// Maximum clip length in seconds
    #[arg(long, value_name = "SECONDS", value_parser = parse_seconds)]
    pub clip_max: Option<f64>,

    /// Minimum gap between clips in seconds
    #[arg(long, value_name = "SECONDS", value_parser = parse_seconds)]
    pub gap_min: Option<f64>,

    /// Maximum gap between clips in seconds
    #[arg(long, value_name = "SECONDS", value_parser = parse_seconds)]
    pub gap_max: Option<f64>,

    /// Seed for a reproducible plan
    #[arg(long)]
    pub seed: Option<u64>,

    /// Configuration file (default: splitter.toml or config/splitter.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl RangeArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            min_clip_duration: self.clip_min,
            max_clip_duration: self.clip_max,
            min_gap: self.gap_min,
            max_gap: self.gap_max,
            seed: self.seed,
            ..ConfigOverrides::default()
        }
    }
}

/// Arguments for the split command
#[derive(Args, Debug, Clone, Default)]
pub struct SplitArgs {
    /// Folder scanned for videos
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Folder receiving the clips
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub ranges: RangeArgs,

    /// Parallel extractions (0 = number of CPUs)
    #[arg(short, long, value_parser = parse_jobs)]
    pub jobs: Option<usize>,

    /// Keep the audio streams
    #[arg(long)]
    pub keep_audio: bool,

    /// Re-encode video instead of stream copy
    #[arg(long)]
    pub reencode: bool,

    /// Encoder used with --reencode
    #[arg(long, requires = "reencode")]
    pub encoder: Option<String>,

    /// Write every clip directly into the output folder
    #[arg(long)]
    pub flat_output: bool,

    /// Input extensions, comma separated
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Video files to split instead of scanning the input folder
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl SplitArgs {
    /// Values that take precedence over the environment and config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input_folder: self.input.clone(),
            output_folder: self.output.clone(),
            mute_audio: self.keep_audio.then_some(false),
            video_codec: self.reencode.then_some(VideoCodec::Reencode),
            reencode_encoder: self.encoder.clone(),
            max_threads: self.jobs,
            extensions: self.extensions.clone(),
            per_file_subfolder: self.flat_output.then_some(false),
            ..self.ranges.overrides()
        }
    }
}

/// Arguments for the plan command
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Media duration in seconds
    #[arg(short, long, value_parser = parse_seconds, required_unless_present = "input", conflicts_with = "input")]
    pub duration: Option<f64>,

    /// Video file whose duration is probed
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub ranges: RangeArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        self.ranges.overrides()
    }
}

/// Arguments for the probe command
#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Input video file path
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
