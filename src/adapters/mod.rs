// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod fs_local;
pub mod probe_ffprobe;

// Re-export adapters
pub use exec_ffmpeg::FFmpegAdapter;
pub use fs_local::LocalFsAdapter;
pub use probe_ffprobe::FFprobeAdapter;
