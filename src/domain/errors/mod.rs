// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A range or duration parameter violates its precondition
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Media duration could not be determined
    #[error("Failed to probe media duration: {0}")]
    ProbeError(String),
    /// Output directory could not be created or written
    #[error("Output directory error: {0}")]
    DirectoryError(String),
    /// A single clip extraction failed
    #[error("Clip extraction failed: {0}")]
    ExtractionFailure(String),
    /// No media files matched the input selection
    #[error("No video files found in {0}")]
    NoInputFiles(String),
    /// File system error outside of the output directory
    #[error("I/O error: {0}")]
    Io(String),
}

impl DomainError {
    /// Whether this error aborts the whole run rather than a single input file
    pub fn is_run_fatal(&self) -> bool {
        matches!(self, DomainError::InvalidConfig(_) | DomainError::NoInputFiles(_))
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}
