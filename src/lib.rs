//! SplitX Video Splitter Library
//!
//! Plans short clips separated by random gaps over a media file and extracts
//! them with a bounded number of parallel ffmpeg processes.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod planner;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use config::SplitterConfig;
pub use domain::errors::DomainError;
pub use domain::model::{ClipPlan, DurationRange, Interval, RunStatistics, TaskOutcome};
pub use engine::{ParallelDispatcher, ProgressReporter};
pub use error::{SplitXError, SplitXResult};
pub use planner::ClipPlanner;
