// Domain rules - Business logic and policies

use std::path::{Path, PathBuf};

use crate::domain::errors::*;
use crate::domain::model::*;

/// Extension used when the input file has none
pub const DEFAULT_CLIP_EXTENSION: &str = "mp4";

/// Business rules for planning parameters
pub struct PlanningRules;

impl PlanningRules {
    /// Validate the clip and gap ranges before any work starts
    pub fn validate_ranges(
        clip_range: &DurationRange,
        gap_range: &DurationRange,
    ) -> Result<(), DomainError> {
        clip_range.validate("clip duration range")?;
        gap_range.validate("gap duration range")?;
        Ok(())
    }

    /// Validate a probed or requested media duration
    pub fn validate_total_duration(total_duration: f64) -> Result<(), DomainError> {
        if !total_duration.is_finite() || total_duration <= 0.0 {
            return Err(DomainError::InvalidConfig(format!(
                "Total duration must be a positive number of seconds (got {})",
                total_duration
            )));
        }
        Ok(())
    }
}

/// Business rules for naming extracted clips
pub struct ClipNaming;

impl ClipNaming {
    /// `clip_<nnn>_<start>s-<end>s.<ext>` with a one-based, zero-padded index
    pub fn file_name(index: usize, interval: &Interval, extension: &str) -> String {
        format!(
            "clip_{:03}_{:.1}s-{:.1}s.{}",
            index + 1,
            interval.start,
            interval.end,
            extension
        )
    }

    /// Full destination path of one clip inside the output directory
    pub fn clip_path(
        output_dir: &Path,
        index: usize,
        interval: &Interval,
        extension: &str,
    ) -> PathBuf {
        output_dir.join(Self::file_name(index, interval, extension))
    }

    /// Clip extension derived from the input file, lower-cased
    pub fn extension_for(input: &Path) -> String {
        input
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .filter(|ext| !ext.is_empty())
            .unwrap_or_else(|| DEFAULT_CLIP_EXTENSION.to_string())
    }

    /// Output directory for one input file
    pub fn output_dir_for(output_root: &Path, input: &Path, per_file_subfolder: bool) -> PathBuf {
        if !per_file_subfolder {
            return output_root.to_path_buf();
        }
        match input.file_stem() {
            Some(stem) if !stem.is_empty() => output_root.join(stem),
            _ => output_root.to_path_buf(),
        }
    }
}

/// Business rules for selecting input media
pub struct InputSelector;

impl InputSelector {
    /// Case-insensitive extension match; `extensions` may be given with or without a dot
    pub fn is_supported(path: &Path, extensions: &[String]) -> bool {
        let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
            return false;
        };
        extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(&ext))
    }
}

#[cfg(test)]
mod tests;
