// Domain models - Core types and data structures

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Closed `[min, max]` range of seconds used for clip and gap lengths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationRange {
    pub min: f64,
    pub max: f64,
}

impl DurationRange {
    /// Create a new range, rejecting non-positive or inverted bounds
    pub fn new(min: f64, max: f64) -> Result<Self, DomainError> {
        let range = Self { min, max };
        range.validate("range")?;
        Ok(range)
    }

    /// Check the range precondition, naming the offending range in the error
    pub fn validate(&self, label: &str) -> Result<(), DomainError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(DomainError::InvalidConfig(format!(
                "{} bounds must be finite (got {}-{})",
                label, self.min, self.max
            )));
        }
        if self.min <= 0.0 {
            return Err(DomainError::InvalidConfig(format!(
                "{} minimum must be greater than zero (got {})",
                label, self.min
            )));
        }
        if self.min > self.max {
            return Err(DomainError::InvalidConfig(format!(
                "{} minimum ({}) exceeds maximum ({})",
                label, self.min, self.max
            )));
        }
        Ok(())
    }

    /// Width of the range in seconds
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether a value lies inside the closed range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for DurationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}s", self.min, self.max)
    }
}

/// One clip to extract, in seconds from the start of the source media
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// Create a new interval with `0 <= start < end`
    pub fn new(start: f64, end: f64) -> Result<Self, DomainError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(DomainError::InvalidConfig(
                "Interval bounds must be finite".to_string(),
            ));
        }
        if start < 0.0 {
            return Err(DomainError::InvalidConfig(format!(
                "Interval start cannot be negative (got {})",
                start
            )));
        }
        if end <= start {
            return Err(DomainError::InvalidConfig(format!(
                "Interval end ({}) must be after start ({})",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Length of the interval in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}s-{:.1}s", self.start, self.end)
    }
}

/// Ordered, non-overlapping schedule of clips for one media file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipPlan {
    total_duration: f64,
    intervals: Vec<Interval>,
}

impl ClipPlan {
    /// Build a plan from already computed intervals, checking ordering and bounds
    pub fn new(total_duration: f64, intervals: Vec<Interval>) -> Result<Self, DomainError> {
        if !(total_duration > 0.0) {
            return Err(DomainError::InvalidConfig(format!(
                "Total duration must be greater than zero (got {})",
                total_duration
            )));
        }

        for (i, interval) in intervals.iter().enumerate() {
            if interval.end > total_duration {
                return Err(DomainError::InvalidConfig(format!(
                    "Clip {} ends at {} past the media duration {}",
                    i + 1,
                    interval.end,
                    total_duration
                )));
            }
            if i > 0 && interval.start < intervals[i - 1].end {
                return Err(DomainError::InvalidConfig(format!(
                    "Clip {} overlaps the previous clip",
                    i + 1
                )));
            }
        }

        Ok(Self {
            total_duration,
            intervals,
        })
    }

    pub(crate) fn from_parts(total_duration: f64, intervals: Vec<Interval>) -> Self {
        Self {
            total_duration,
            intervals,
        }
    }

    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn get(&self, index: usize) -> Option<&Interval> {
        self.intervals.get(index)
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }

    /// Sum of all clip lengths in seconds
    pub fn covered_duration(&self) -> f64 {
        self.intervals.iter().map(Interval::duration).sum()
    }

    /// Gaps between consecutive clips in seconds
    pub fn gaps(&self) -> Vec<f64> {
        self.intervals
            .windows(2)
            .map(|pair| pair[1].start - pair[0].end)
            .collect()
    }
}

/// Video codec handling for extracted clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoCodec {
    /// Stream copy without re-encoding
    #[default]
    Copy,
    /// Re-encode the video stream
    Reencode,
}

impl VideoCodec {
    /// Parse codec mode from string
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.trim().to_lowercase().as_str() {
            "copy" => Ok(VideoCodec::Copy),
            "reencode" | "re-encode" => Ok(VideoCodec::Reencode),
            other => Err(DomainError::InvalidConfig(format!(
                "Invalid video codec: {}. Valid values: copy, reencode",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoCodec::Copy => "copy",
            VideoCodec::Reencode => "reencode",
        }
    }
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options handed to the extraction step for every clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Drop all audio streams
    pub mute: bool,
    /// Copy or re-encode the video stream
    pub codec: VideoCodec,
    /// Encoder used when re-encoding
    pub encoder: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mute: true,
            codec: VideoCodec::Copy,
            encoder: "libx264".to_string(),
        }
    }
}

/// Recorded result of one dispatched extraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskOutcome {
    /// Zero-based position in the plan
    pub index: usize,
    pub interval: Interval,
    pub succeeded: bool,
}

impl TaskOutcome {
    /// One-based clip number used in output names
    pub fn clip_number(&self) -> usize {
        self.index + 1
    }
}

/// Counters and timings of one dispatch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub total_clips: usize,
    /// Outcomes processed, successful or not
    pub completed_clips: usize,
    /// Planning plus dispatch
    pub elapsed_wall_time: Duration,
    /// Dispatch only
    pub elapsed_processing_time: Duration,
}

impl RunStatistics {
    /// Average processing time per planned clip
    pub fn average_time_per_clip(&self) -> Option<Duration> {
        if self.total_clips == 0 {
            return None;
        }
        Some(self.elapsed_processing_time.div_f64(self.total_clips as f64))
    }

    /// Whether every planned clip has been accounted for
    pub fn is_complete(&self) -> bool {
        self.completed_clips == self.total_clips
    }
}

/// Statistics plus the per-task outcomes of one dispatch, sorted by index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchReport {
    pub statistics: RunStatistics,
    pub outcomes: Vec<TaskOutcome>,
}

impl DispatchReport {
    pub fn succeeded_clips(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded).count()
    }

    pub fn failed_clips(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded).count()
    }
}
