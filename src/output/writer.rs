//! Human-readable console summaries

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::SplitterConfig;
use crate::domain::model::{ClipPlan, VideoCodec};
use crate::domain::rules::ClipNaming;
use crate::output::{BatchReport, FileReport, SkippedFile};

/// Writes banners and summaries to any `Write` sink
pub struct SummaryWriter<W: Write> {
    out: W,
}

impl SummaryWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Settings and the list of files about to be processed
    pub fn write_banner(&mut self, config: &SplitterConfig, inputs: &[PathBuf]) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "🎬 Video Splitter")?;
        writeln!(out, "================")?;
        writeln!(out)?;
        writeln!(out, "⚙️  Processing Settings:")?;
        writeln!(out, "   Clip duration: {} (random)", config.clip_range())?;
        writeln!(out, "   Gap duration: {} (random)", config.gap_range())?;
        writeln!(
            out,
            "   Audio: {}",
            if config.mute_audio { "Muted" } else { "Kept" }
        )?;
        match config.video_codec {
            VideoCodec::Copy => writeln!(out, "   Video codec: Stream copy (fastest)")?,
            VideoCodec::Reencode => {
                writeln!(out, "   Video codec: Re-encode ({})", config.reencode_encoder)?
            }
        }
        writeln!(out, "   Parallel extractions: {}", config.worker_count())?;
        if let Some(seed) = config.seed {
            writeln!(out, "   Seed: {}", seed)?;
        }
        writeln!(out)?;
        writeln!(out, "📂 Input folder: {}", config.input_folder.display())?;
        writeln!(out, "📂 Output folder: {}", config.output_folder.display())?;
        writeln!(out)?;
        writeln!(out, "Found {} video file(s):", inputs.len())?;
        for (i, input) in inputs.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, input.display())?;
        }
        writeln!(out)?;
        out.flush()
    }

    /// Printed once a file has been probed and planned
    pub fn write_file_header(
        &mut self,
        input: &Path,
        total_duration: f64,
        clip_count: usize,
    ) -> io::Result<()> {
        writeln!(self.out, "Processing: {}", input.display())?;
        writeln!(self.out, "Video duration: {:.2}s", total_duration)?;
        writeln!(self.out, "Generating {} clips...", clip_count)?;
        self.out.flush()
    }

    pub fn write_file_summary(&mut self, report: &FileReport) -> io::Result<()> {
        let stats = &report.dispatch.statistics;
        let out = &mut self.out;
        writeln!(out)?;
        writeln!(out, "🎉 Processing complete!")?;
        writeln!(out, "📁 Output folder: {}", report.output_dir.display())?;
        writeln!(
            out,
            "⏱️  Total time: {:.2} seconds",
            stats.elapsed_wall_time.as_secs_f64()
        )?;
        writeln!(
            out,
            "🎬 Clips created: {}/{}",
            stats.completed_clips, stats.total_clips
        )?;
        writeln!(
            out,
            "✅ Successful: {}/{}",
            report.succeeded_clips(),
            stats.total_clips
        )?;
        if let Some(average) = stats.average_time_per_clip() {
            writeln!(
                out,
                "⚡ Average time per clip: {:.2}s",
                average.as_secs_f64()
            )?;
        }
        writeln!(out, "Finished processing {}", report.input.display())?;
        writeln!(out)?;
        out.flush()
    }

    pub fn write_skipped(&mut self, skipped: &SkippedFile) -> io::Result<()> {
        writeln!(
            self.out,
            "⚠️  Skipping {}: {}",
            skipped.input.display(),
            skipped.reason
        )?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Totals over every input file
    pub fn write_batch_summary(&mut self, batch: &BatchReport) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "All video files processed!")?;
        writeln!(
            out,
            "   Files processed: {}, skipped: {}",
            batch.processed.len(),
            batch.skipped.len()
        )?;
        for skipped in &batch.skipped {
            writeln!(out, "   - {}: {}", skipped.input.display(), skipped.reason)?;
        }
        writeln!(
            out,
            "   Clips succeeded: {}/{}",
            batch.succeeded_clips(),
            batch.total_clips()
        )?;
        writeln!(
            out,
            "   Total time: {:.2} seconds",
            batch.elapsed().as_secs_f64()
        )?;
        out.flush()
    }

    /// One row per planned clip with its future file name
    pub fn write_plan_table(&mut self, plan: &ClipPlan, extension: &str) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(
            out,
            "{:>5}  {:>9}  {:>9}  {:>8}  {}",
            "#", "start", "end", "length", "file"
        )?;
        for (index, interval) in plan.iter().enumerate() {
            writeln!(
                out,
                "{:>5}  {:>9.2}  {:>9.2}  {:>8.2}  {}",
                index + 1,
                interval.start,
                interval.end,
                interval.duration(),
                ClipNaming::file_name(index, interval, extension)
            )?;
        }
        writeln!(
            out,
            "{} clips, {:.2}s of {:.2}s covered",
            plan.len(),
            plan.covered_duration(),
            plan.total_duration()
        )?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DispatchReport, Interval, RunStatistics, TaskOutcome};
    use std::time::Duration;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut SummaryWriter<Vec<u8>>) -> io::Result<()>,
    {
        let mut writer = SummaryWriter::new(Vec::new());
        f(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_banner_lists_settings_and_files() {
        let config = SplitterConfig {
            seed: Some(42),
            ..SplitterConfig::default()
        };
        let inputs = vec![PathBuf::from("input/a.mp4"), PathBuf::from("input/b.mkv")];

        let text = render(|w| w.write_banner(&config, &inputs));

        assert!(text.contains("Clip duration: 3-7s (random)"));
        assert!(text.contains("Gap duration: 5-10s (random)"));
        assert!(text.contains("Audio: Muted"));
        assert!(text.contains("Stream copy"));
        assert!(text.contains("Seed: 42"));
        assert!(text.contains("Found 2 video file(s):"));
        assert!(text.contains("  2. input/b.mkv"));
    }

    #[test]
    fn test_file_summary_includes_average() {
        let report = FileReport {
            input: PathBuf::from("input/a.mp4"),
            output_dir: PathBuf::from("out/a"),
            total_duration: 20.0,
            dispatch: DispatchReport {
                statistics: RunStatistics {
                    total_clips: 2,
                    completed_clips: 2,
                    elapsed_wall_time: Duration::from_millis(1500),
                    elapsed_processing_time: Duration::from_secs(1),
                },
                outcomes: vec![
                    TaskOutcome {
                        index: 0,
                        interval: Interval { start: 0.0, end: 4.0 },
                        succeeded: true,
                    },
                    TaskOutcome {
                        index: 1,
                        interval: Interval { start: 11.0, end: 17.0 },
                        succeeded: false,
                    },
                ],
            },
        };

        let text = render(|w| w.write_file_summary(&report));

        assert!(text.contains("Total time: 1.50 seconds"));
        assert!(text.contains("Clips created: 2/2"));
        assert!(text.contains("Successful: 1/2"));
        assert!(text.contains("Average time per clip: 0.50s"));
    }

    #[test]
    fn test_plan_table_rows() {
        let plan = ClipPlan::new(
            20.0,
            vec![
                Interval { start: 0.0, end: 4.0 },
                Interval { start: 11.0, end: 17.0 },
            ],
        )
        .unwrap();

        let text = render(|w| w.write_plan_table(&plan, "mp4"));

        assert!(text.contains("clip_001_0.0s-4.0s.mp4"));
        assert!(text.contains("clip_002_11.0s-17.0s.mp4"));
        assert!(text.contains("2 clips, 10.00s of 20.00s covered"));
    }
}
