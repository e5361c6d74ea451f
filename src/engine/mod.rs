//! Clip dispatch engine module

pub mod dispatcher;
pub mod progress;
pub mod worker;

pub use dispatcher::ParallelDispatcher;
pub use progress::{ConsoleReporter, ProgressEvent, ProgressFanout, ProgressReporter, TracingReporter};
pub use worker::{ClipWorker, ExtractionWorker};
