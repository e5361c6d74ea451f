//! SplitX Video Splitter
//!
//! Cuts videos into short clips separated by random gaps, extracting the
//! clips of each file in parallel batches with ffmpeg.
//!
//! # Usage
//!
//! ```bash
//! splitter split --input ./input --output ./output_clips --jobs 4
//! splitter plan --duration 120 --seed 7 --json
//! splitter probe ./input/video.mp4
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use splitx_cli::cli::{commands, Cli, Commands};
use splitx_cli::utils::logging::LoggingConfig;

/// Main entry point for the SplitX CLI application
#[tokio::main]
async fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let logging = LoggingConfig::new(cli.log_level, cli.log_format);
    if let Err(e) = logging.initialize() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    logging.log_system_info();

    // Execute the requested command
    let result = match cli.command {
        Commands::Split(args) => {
            info!("Executing split command");
            commands::split(args).await
        }
        Commands::Plan(args) => {
            info!("Executing plan command");
            commands::plan(args).await
        }
        Commands::Probe(args) => {
            info!("Executing probe command");
            commands::probe(args).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(commands::exit_code(&e))
        }
    }
}
