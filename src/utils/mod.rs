//! Common utilities and helpers

use std::time::Duration;

pub mod logging;

/// Utility functions for SplitX
pub struct Utils;

impl Utils {
    /// Format duration for display
    pub fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        let milliseconds = duration.subsec_millis();

        if hours > 0 {
            format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, milliseconds)
        } else {
            format!("{:02}:{:02}.{:03}", minutes, seconds, milliseconds)
        }
    }

    /// Calculate progress percentage
    pub fn calculate_progress(current: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (current as f64 / total as f64) * 100.0
        }
    }

    /// Resolve a configured worker count; zero means the host's available parallelism
    pub fn resolve_parallelism(requested: usize) -> usize {
        if requested > 0 {
            requested
        } else {
            num_cpus::get().max(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(Utils::format_duration(Duration::from_millis(65_250)), "01:05.250");
        assert_eq!(
            Utils::format_duration(Duration::from_secs(3_725)),
            "01:02:05.000"
        );
    }

    #[test]
    fn test_calculate_progress() {
        assert_eq!(Utils::calculate_progress(0, 0), 0.0);
        assert_eq!(Utils::calculate_progress(1, 2), 50.0);
        assert_eq!(Utils::calculate_progress(3, 3), 100.0);
    }

    #[test]
    fn test_resolve_parallelism() {
        assert_eq!(Utils::resolve_parallelism(3), 3);
        assert!(Utils::resolve_parallelism(0) >= 1);
    }
}
