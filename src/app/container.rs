use std::sync::Arc;

use crate::adapters::{FFmpegAdapter, FFprobeAdapter, LocalFsAdapter};
use crate::app::split_interactor::SplitInteractor;
use crate::ports::{ExtractPort, FsPort, ProbePort};

pub trait AppContainer: Send + Sync {
    fn split_interactor(&self) -> Arc<SplitInteractor>;
    fn probe_port(&self) -> Arc<dyn ProbePort>;
}

pub struct DefaultAppContainer {
    probe_port: Arc<dyn ProbePort>,
    split_interactor: Arc<SplitInteractor>,
}

impl DefaultAppContainer {
    /// Wire the ffprobe, ffmpeg and local filesystem adapters
    pub fn new() -> Self {
        let probe_port: Arc<dyn ProbePort> = Arc::new(FFprobeAdapter::new());
        let extract_port: Arc<dyn ExtractPort> = Arc::new(FFmpegAdapter::new());
        let fs_port: Arc<dyn FsPort> = Arc::new(LocalFsAdapter::new());

        let split_interactor = Arc::new(
            SplitInteractor::new(Arc::clone(&probe_port), extract_port, fs_port)
                .with_console_output(),
        );

        Self {
            probe_port,
            split_interactor,
        }
    }
}

impl Default for DefaultAppContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContainer for DefaultAppContainer {
    fn split_interactor(&self) -> Arc<SplitInteractor> {
        Arc::clone(&self.split_interactor)
    }

    fn probe_port(&self) -> Arc<dyn ProbePort> {
        Arc::clone(&self.probe_port)
    }
}
