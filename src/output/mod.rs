//! Run reports and their console rendering

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::model::DispatchReport;

pub mod writer;

pub use writer::SummaryWriter;

/// Result of splitting one input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub input: PathBuf,
    /// Directory the clips were written to
    pub output_dir: PathBuf,
    /// Probed media duration in seconds
    pub total_duration: f64,
    pub dispatch: DispatchReport,
}

impl FileReport {
    pub fn total_clips(&self) -> usize {
        self.dispatch.statistics.total_clips
    }

    pub fn succeeded_clips(&self) -> usize {
        self.dispatch.succeeded_clips()
    }
}

/// An input file that was abandoned before or during planning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub input: PathBuf,
    pub reason: String,
}

/// Result of a whole multi-file run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub processed: Vec<FileReport>,
    pub skipped: Vec<SkippedFile>,
}

impl BatchReport {
    /// Empty report stamped with the current time
    pub fn begin() -> Self {
        let now = Utc::now();
        Self {
            started_at: now,
            finished_at: now,
            processed: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Stamp the end time
    pub fn finish(mut self) -> Self {
        self.finished_at = Utc::now();
        self
    }

    pub fn total_clips(&self) -> usize {
        self.processed.iter().map(FileReport::total_clips).sum()
    }

    pub fn succeeded_clips(&self) -> usize {
        self.processed.iter().map(FileReport::succeeded_clips).sum()
    }

    /// Wall time between `begin` and `finish`
    pub fn elapsed(&self) -> Duration {
        (self.finished_at - self.started_at)
            .to_std()
            .unwrap_or_default()
    }

    /// True when files were attempted and none of them could be processed
    pub fn all_skipped(&self) -> bool {
        self.processed.is_empty() && !self.skipped.is_empty()
    }
}
