//! CLI module for SplitX
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

use crate::utils::logging::{LogFormat, LogLevel};

pub mod args;
pub mod commands;

pub use args::{PlanArgs, ProbeArgs, SplitArgs};

/// SplitX Video Splitter
///
/// Cuts every video of a folder into short clips separated by random gaps,
/// extracting several clips in parallel with ffmpeg.
#[derive(Parser, Debug)]
#[command(name = "splitter")]
#[command(about = "SplitX Video Splitter - Short random clips from long videos")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (overridden by RUST_LOG)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Log output format: pretty, compact or json
    #[arg(long, default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split the videos of the input folder into clips
    Split(SplitArgs),
    /// Print a clip plan without extracting anything
    Plan(PlanArgs),
    /// Print the duration of a video file
    Probe(ProbeArgs),
}
