// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for media duration probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Media duration in seconds
    async fn probe_duration(&self, file_path: &Path) -> Result<f64, DomainError>;
}

/// Port for extracting one clip from a media file
#[async_trait]
pub trait ExtractPort: Send + Sync {
    /// Extract `interval` of `input` into `destination`, returning whether it succeeded.
    /// Failures are reported through the return value, never as a panic or error.
    async fn extract(
        &self,
        input: &Path,
        interval: &Interval,
        destination: &Path,
        options: &ExtractOptions,
    ) -> bool;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Create directory (including parent directories); succeeds if it already exists
    async fn create_directory(&self, dir_path: &Path) -> Result<(), DomainError>;

    /// Check if file exists
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError>;

    /// Media files directly inside `dir_path` with one of `extensions`, sorted by name
    async fn list_media_files(
        &self,
        dir_path: &Path,
        extensions: &[String],
    ) -> Result<Vec<PathBuf>, DomainError>;
}
