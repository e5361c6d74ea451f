//! Bounded-width batch dispatcher

use std::num::NonZeroUsize;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use futures::FutureExt;
use tracing::{debug, error, info, warn};

use crate::domain::errors::DomainError;
use crate::domain::model::{ClipPlan, DispatchReport, RunStatistics, TaskOutcome};
use crate::engine::progress::{ProgressEvent, ProgressReporter};
use crate::engine::worker::ClipWorker;
use crate::utils::Utils;

/// Runs a clip plan in consecutive batches of at most `concurrency_limit` tasks.
///
/// A batch is launched only after every task of the previous batch has
/// finished, so no more than `concurrency_limit` workers are ever in flight.
pub struct ParallelDispatcher {
    concurrency_limit: NonZeroUsize,
    reporter: Arc<dyn ProgressReporter>,
}

/// State shared by the tasks of one run
struct SharedProgress {
    completed: AtomicUsize,
    report_lock: Mutex<()>,
    reporter: Arc<dyn ProgressReporter>,
    total: usize,
}

impl SharedProgress {
    // Count and report under one lock so reports never interleave and
    // percentages rise in report order.
    fn record(&self, outcome: TaskOutcome) {
        let _guard = self
            .report_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
        let event = ProgressEvent {
            percent_complete: Utils::calculate_progress(completed, self.total),
            completed,
            total: self.total,
            outcome,
        };
        self.reporter.on_outcome(&event);
    }
}

impl ParallelDispatcher {
    /// Create a dispatcher; a limit of zero must be resolved by the caller first
    pub fn new(
        concurrency_limit: usize,
        reporter: Arc<dyn ProgressReporter>,
    ) -> Result<Self, DomainError> {
        let concurrency_limit = NonZeroUsize::new(concurrency_limit).ok_or_else(|| {
            DomainError::InvalidConfig("Concurrency limit must be at least 1".to_string())
        })?;
        Ok(Self {
            concurrency_limit,
            reporter,
        })
    }

    pub fn concurrency_limit(&self) -> usize {
        self.concurrency_limit.get()
    }

    /// Dispatch every interval of `plan` to `worker`.
    ///
    /// Worker failures and panics are recorded as unsuccessful outcomes and
    /// never stop the run. `run_started` marks the beginning of planning and
    /// is used for the wall-clock figure.
    pub async fn run<W>(&self, plan: &ClipPlan, worker: Arc<W>, run_started: Instant) -> DispatchReport
    where
        W: ClipWorker,
    {
        let total = plan.len();
        let limit = self.concurrency_limit.get();
        let processing_started = Instant::now();

        let shared = Arc::new(SharedProgress {
            completed: AtomicUsize::new(0),
            report_lock: Mutex::new(()),
            reporter: Arc::clone(&self.reporter),
            total,
        });

        self.reporter.on_start(total);
        info!(total_clips = total, concurrency = limit, "Dispatching clips");

        let mut outcomes = Vec::with_capacity(total);
        let indices: Vec<usize> = (0..total).collect();

        for (batch_number, batch) in indices.chunks(limit).enumerate() {
            debug!(batch = batch_number + 1, size = batch.len(), "Launching batch");

            let handles: Vec<_> = batch
                .iter()
                .map(|&index| {
                    let interval = plan.intervals()[index];
                    let worker = Arc::clone(&worker);
                    let shared = Arc::clone(&shared);

                    let handle = tokio::spawn(async move {
                        let succeeded = AssertUnwindSafe(worker.process(index, interval))
                            .catch_unwind()
                            .await
                            .unwrap_or_else(|_| {
                                warn!(clip = index + 1, "Clip worker panicked");
                                false
                            });

                        let outcome = TaskOutcome {
                            index,
                            interval,
                            succeeded,
                        };
                        shared.record(outcome);
                        outcome
                    });

                    (index, interval, handle)
                })
                .collect();

            // Join barrier: the next batch waits for all of these.
            for (index, interval, handle) in handles {
                match handle.await {
                    Ok(outcome) => outcomes.push(outcome),
                    Err(e) => {
                        error!(clip = index + 1, error = %e, "Clip task aborted");
                        outcomes.push(TaskOutcome {
                            index,
                            interval,
                            succeeded: false,
                        });
                    }
                }
            }
        }

        outcomes.sort_by_key(|outcome| outcome.index);

        let finished = Instant::now();
        let statistics = RunStatistics {
            total_clips: total,
            completed_clips: shared.completed.load(Ordering::SeqCst),
            elapsed_wall_time: finished.saturating_duration_since(run_started),
            elapsed_processing_time: finished.saturating_duration_since(processing_started),
        };

        self.reporter.on_finish(&statistics);

        DispatchReport {
            statistics,
            outcomes,
        }
    }
}
