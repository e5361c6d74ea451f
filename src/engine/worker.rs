//! Per-clip work units run by the dispatcher

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::model::{ExtractOptions, Interval};
use crate::domain::rules::ClipNaming;
use crate::ports::ExtractPort;

/// One unit of dispatched work
#[async_trait]
pub trait ClipWorker: Send + Sync + 'static {
    /// Process the clip at `index` (zero-based plan position), returning success
    async fn process(&self, index: usize, interval: Interval) -> bool;
}

/// Extracts clips of one input file into one output directory
pub struct ExtractionWorker {
    extract_port: Arc<dyn ExtractPort>,
    input: PathBuf,
    output_dir: PathBuf,
    extension: String,
    options: ExtractOptions,
}

impl ExtractionWorker {
    pub fn new(
        extract_port: Arc<dyn ExtractPort>,
        input: PathBuf,
        output_dir: PathBuf,
        extension: String,
        options: ExtractOptions,
    ) -> Self {
        Self {
            extract_port,
            input,
            output_dir,
            extension,
            options,
        }
    }

    /// Destination of the clip at `index`
    pub fn destination(&self, index: usize, interval: &Interval) -> PathBuf {
        ClipNaming::clip_path(&self.output_dir, index, interval, &self.extension)
    }
}

#[async_trait]
impl ClipWorker for ExtractionWorker {
    async fn process(&self, index: usize, interval: Interval) -> bool {
        let destination = self.destination(index, &interval);
        debug!(
            clip = index + 1,
            destination = %destination.display(),
            "Extracting clip"
        );
        self.extract_port
            .extract(&self.input, &interval, &destination, &self.options)
            .await
    }
}
