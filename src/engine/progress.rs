//! Progress reporting sinks for clip dispatch

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::model::{RunStatistics, TaskOutcome};
use crate::domain::rules::ClipNaming;
use crate::utils::Utils;

/// One completed task, emitted in the dispatcher's serialized report order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Progress percentage (0.0 - 100.0)
    pub percent_complete: f64,
    /// Outcomes reported so far, this one included
    pub completed: usize,
    /// Planned clips
    pub total: usize,
    pub outcome: TaskOutcome,
}

/// Sink for dispatch progress.
///
/// `on_outcome` is only ever called from inside the dispatcher's critical
/// section, so implementations never see two calls at once.
pub trait ProgressReporter: Send + Sync {
    /// Called once before the first batch is launched
    fn on_start(&self, _total: usize) {}

    /// Called once per finished task
    fn on_outcome(&self, event: &ProgressEvent);

    /// Called after every batch has drained
    fn on_finish(&self, _statistics: &RunStatistics) {}
}

/// Prints one line per clip: saved clips to stdout, failures to stderr
pub struct ConsoleReporter {
    output_dir: PathBuf,
    extension: String,
}

impl ConsoleReporter {
    pub fn new(output_dir: PathBuf, extension: String) -> Self {
        Self {
            output_dir,
            extension,
        }
    }

    /// Text of the line printed for an event
    pub fn format_line(&self, event: &ProgressEvent) -> String {
        let path = ClipNaming::clip_path(
            &self.output_dir,
            event.outcome.index,
            &event.outcome.interval,
            &self.extension,
        );
        if event.outcome.succeeded {
            format!("✅ [{:.1}%] Saved: {}", event.percent_complete, path.display())
        } else {
            format!("❌ [{:.1}%] Failed: {}", event.percent_complete, path.display())
        }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn on_outcome(&self, event: &ProgressEvent) {
        let line = self.format_line(event);
        // Broken pipes on the console are not worth failing a clip over.
        if event.outcome.succeeded {
            let _ = writeln!(io::stdout().lock(), "{}", line);
        } else {
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
    }
}

/// Emits progress as structured tracing events
#[derive(Debug, Default)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn on_start(&self, total: usize) {
        info!(total_clips = total, "Dispatch started");
    }

    fn on_outcome(&self, event: &ProgressEvent) {
        let outcome = &event.outcome;
        if outcome.succeeded {
            info!(
                clip = outcome.clip_number(),
                start = outcome.interval.start,
                end = outcome.interval.end,
                percent = event.percent_complete,
                "Clip extracted"
            );
        } else {
            warn!(
                clip = outcome.clip_number(),
                start = outcome.interval.start,
                end = outcome.interval.end,
                percent = event.percent_complete,
                "Clip extraction failed"
            );
        }
    }

    fn on_finish(&self, statistics: &RunStatistics) {
        info!(
            completed = statistics.completed_clips,
            total = statistics.total_clips,
            processing = %Utils::format_duration(statistics.elapsed_processing_time),
            wall = %Utils::format_duration(statistics.elapsed_wall_time),
            "Dispatch finished"
        );
    }
}

/// Forwards every call to several reporters in order
#[derive(Default, Clone)]
pub struct ProgressFanout {
    reporters: Vec<Arc<dyn ProgressReporter>>,
}

impl ProgressFanout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reporter
    pub fn with(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporters.push(reporter);
        self
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl ProgressReporter for ProgressFanout {
    fn on_start(&self, total: usize) {
        for reporter in &self.reporters {
            reporter.on_start(total);
        }
    }

    fn on_outcome(&self, event: &ProgressEvent) {
        for reporter in &self.reporters {
            reporter.on_outcome(event);
        }
    }

    fn on_finish(&self, statistics: &RunStatistics) {
        for reporter in &self.reporters {
            reporter.on_finish(statistics);
        }
    }
}
