// Split interactor - Orchestrates the multi-file split use case

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use tracing::{error, info, instrument, warn};

use crate::config::SplitterConfig;
use crate::domain::errors::*;
use crate::domain::rules::*;
use crate::engine::{
    ConsoleReporter, ExtractionWorker, ParallelDispatcher, ProgressFanout, ProgressReporter,
    TracingReporter,
};
use crate::output::{BatchReport, FileReport, SkippedFile, SummaryWriter};
use crate::planner::{ClipPlanner, RandomSource, SeededRandom};
use crate::ports::*;

/// Request for one split run
#[derive(Debug, Clone, Default)]
pub struct SplitRequest {
    pub config: SplitterConfig,
    /// Explicit inputs; empty means discover files in the input folder
    pub files: Vec<PathBuf>,
}

type ConsoleSink = Mutex<SummaryWriter<Box<dyn Write + Send>>>;

/// Interactor for the split use case
pub struct SplitInteractor {
    probe_port: Arc<dyn ProbePort>,
    extract_port: Arc<dyn ExtractPort>,
    fs_port: Arc<dyn FsPort>,
    console: Option<ConsoleSink>,
    extra_reporter: Option<Arc<dyn ProgressReporter>>,
}

impl SplitInteractor {
    /// Create new split interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        extract_port: Arc<dyn ExtractPort>,
        fs_port: Arc<dyn FsPort>,
    ) -> Self {
        Self {
            probe_port,
            extract_port,
            fs_port,
            console: None,
            extra_reporter: None,
        }
    }

    /// Print banner, per-clip lines and summaries to stdout
    pub fn with_console_output(mut self) -> Self {
        self.console = Some(Mutex::new(SummaryWriter::new(Box::new(std::io::stdout()))));
        self
    }

    /// Also send dispatch progress to `reporter`
    pub fn with_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.extra_reporter = Some(reporter);
        self
    }

    /// Split every input of the request, skipping files that fail on their own
    pub async fn execute(&self, request: SplitRequest) -> Result<BatchReport, DomainError> {
        let config = request.config;
        config.validate()?;

        let planner = ClipPlanner::new(config.clip_range(), config.gap_range())?;
        let mut rng = SeededRandom::from_optional_seed(config.seed);

        let inputs = if request.files.is_empty() {
            self.discover_inputs(&config).await?
        } else {
            request.files
        };

        self.console(|w| w.write_banner(&config, &inputs));
        info!(
            files = inputs.len(),
            workers = config.worker_count(),
            seed = ?config.seed,
            "Starting split run"
        );

        let mut batch = BatchReport::begin();

        for input in &inputs {
            match self.split_file(input, &config, &planner, &mut rng).await {
                Ok(report) => {
                    self.console(|w| w.write_file_summary(&report));
                    batch.processed.push(report);
                }
                Err(e) if e.is_run_fatal() => return Err(e),
                Err(e) => {
                    error!(file = %input.display(), error = %e, "Skipping file");
                    let skipped = SkippedFile {
                        input: input.clone(),
                        reason: e.to_string(),
                    };
                    self.console(|w| w.write_skipped(&skipped));
                    batch.skipped.push(skipped);
                }
            }
        }

        let batch = batch.finish();
        self.console(|w| w.write_batch_summary(&batch));
        info!(
            processed = batch.processed.len(),
            skipped = batch.skipped.len(),
            clips = batch.total_clips(),
            succeeded = batch.succeeded_clips(),
            "Split run finished"
        );

        Ok(batch)
    }

    /// Media files of the input folder, creating the folder when it is missing
    pub async fn discover_inputs(&self, config: &SplitterConfig) -> Result<Vec<PathBuf>, DomainError> {
        let folder = &config.input_folder;

        if !self.fs_port.file_exists(folder).await? {
            info!("Creating input folder: {}", folder.display());
            self.fs_port.create_directory(folder).await?;
        }

        let files = self
            .fs_port
            .list_media_files(folder, &config.extensions)
            .await?;

        if files.is_empty() {
            warn!(
                "No video files found; place files with extensions {:?} in {}",
                config.extensions,
                folder.display()
            );
            return Err(DomainError::NoInputFiles(folder.display().to_string()));
        }

        Ok(files)
    }

    /// Create the output directory, probe, plan and dispatch one input file
    #[instrument(skip_all, fields(file = %input.display()))]
    pub async fn split_file<R>(
        &self,
        input: &Path,
        config: &SplitterConfig,
        planner: &ClipPlanner,
        rng: &mut R,
    ) -> Result<FileReport, DomainError>
    where
        R: RandomSource + ?Sized,
    {
        if !self.fs_port.file_exists(input).await? {
            return Err(DomainError::Io(format!(
                "Input video does not exist: {}",
                input.display()
            )));
        }

        let output_dir =
            ClipNaming::output_dir_for(&config.output_folder, input, config.per_file_subfolder);
        self.fs_port.create_directory(&output_dir).await?;

        let total_duration = self.probe_port.probe_duration(input).await?;
        if !total_duration.is_finite() || total_duration <= 0.0 {
            return Err(DomainError::ProbeError(format!(
                "Invalid video duration: {}",
                total_duration
            )));
        }

        let run_started = Instant::now();
        let plan = planner.plan(total_duration, rng)?;
        info!(
            duration = total_duration,
            clips = plan.len(),
            "Planned clips"
        );
        self.console(|w| w.write_file_header(input, total_duration, plan.len()));

        let extension = ClipNaming::extension_for(input);
        let worker = Arc::new(ExtractionWorker::new(
            Arc::clone(&self.extract_port),
            input.to_path_buf(),
            output_dir.clone(),
            extension.clone(),
            config.extract_options(),
        ));

        let dispatcher = ParallelDispatcher::new(
            config.worker_count(),
            self.reporter_for(&output_dir, &extension),
        )?;
        let dispatch = dispatcher.run(&plan, worker, run_started).await;

        Ok(FileReport {
            input: input.to_path_buf(),
            output_dir,
            total_duration,
            dispatch,
        })
    }

    fn reporter_for(&self, output_dir: &Path, extension: &str) -> Arc<dyn ProgressReporter> {
        let mut fanout = ProgressFanout::new().with(Arc::new(TracingReporter));
        if self.console.is_some() {
            fanout = fanout.with(Arc::new(ConsoleReporter::new(
                output_dir.to_path_buf(),
                extension.to_string(),
            )));
        }
        if let Some(reporter) = &self.extra_reporter {
            fanout = fanout.with(Arc::clone(reporter));
        }
        Arc::new(fanout)
    }

    fn console<F>(&self, render: F)
    where
        F: FnOnce(&mut SummaryWriter<Box<dyn Write + Send>>) -> std::io::Result<()>,
    {
        if let Some(console) = &self.console {
            let mut writer = console.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = render(&mut writer) {
                warn!(error = %e, "Failed to write to console");
            }
        }
    }
}
