//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info};

use crate::app::{AppContainer, DefaultAppContainer, SplitRequest};
use crate::cli::args::{PlanArgs, ProbeArgs, SplitArgs};
use crate::config::{ConfigLoader, ConfigOverrides, SplitterConfig};
use crate::domain::errors::DomainError;
use crate::domain::model::ClipPlan;
use crate::domain::rules::ClipNaming;
use crate::error::SplitXError;
use crate::output::SummaryWriter;
use crate::planner::{ClipPlanner, SeededRandom};
use crate::ports::ProbePort;

/// Execute the split command
pub async fn split(args: SplitArgs) -> Result<()> {
    info!("Starting split operation");

    let config = resolve_config(args.ranges.config.as_deref(), args.overrides())?;
    let container = DefaultAppContainer::new();

    let request = SplitRequest {
        config,
        files: args.files,
    };

    let batch = container
        .split_interactor()
        .execute(request)
        .await
        .context("Split run failed")?;

    if batch.all_skipped() {
        error!("Every input file was skipped");
        return Err(SplitXError::AllFilesFailed {
            skipped: batch.skipped.len(),
        }
        .into());
    }

    info!("Split operation completed successfully");
    Ok(())
}

/// Plan row printed by `plan --json`
#[derive(Serialize)]
struct PlannedClip {
    clip: usize,
    start: f64,
    end: f64,
    duration: f64,
    file: String,
}

#[derive(Serialize)]
struct PlanOutput {
    total_duration: f64,
    seed: Option<u64>,
    clips: Vec<PlannedClip>,
}

impl PlanOutput {
    fn new(plan: &ClipPlan, seed: Option<u64>, extension: &str) -> Self {
        Self {
            total_duration: plan.total_duration(),
            seed,
            clips: plan
                .iter()
                .enumerate()
                .map(|(index, interval)| PlannedClip {
                    clip: index + 1,
                    start: interval.start,
                    end: interval.end,
                    duration: interval.duration(),
                    file: ClipNaming::file_name(index, interval, extension),
                })
                .collect(),
        }
    }
}

/// Execute the plan command
pub async fn plan(args: PlanArgs) -> Result<()> {
    let config = resolve_config(args.ranges.config.as_deref(), args.overrides())?;
    config.validate()?;

    let total_duration = match (&args.input, args.duration) {
        (_, Some(duration)) => duration,
        (Some(input), None) => DefaultAppContainer::new()
            .probe_port()
            .probe_duration(input)
            .await
            .with_context(|| format!("Failed to probe {}", input.display()))?,
        (None, None) => anyhow::bail!("Either --duration or --input is required"),
    };

    let extension = args
        .input
        .as_deref()
        .map(ClipNaming::extension_for)
        .unwrap_or_else(|| crate::domain::rules::DEFAULT_CLIP_EXTENSION.to_string());

    let planner = ClipPlanner::new(config.clip_range(), config.gap_range())?;
    let mut rng = SeededRandom::from_optional_seed(config.seed);
    let plan = planner.plan(total_duration, &mut rng)?;

    if args.json {
        let json = serde_json::to_string_pretty(&PlanOutput::new(&plan, rng.seed(), &extension))
            .context("Failed to serialize plan to JSON")?;
        println!("{}", json);
    } else {
        SummaryWriter::stdout()
            .write_plan_table(&plan, &extension)
            .context("Failed to write plan")?;
    }

    Ok(())
}

#[derive(Serialize)]
struct ProbeOutput<'a> {
    input: &'a Path,
    duration: f64,
}

/// Execute the probe command
pub async fn probe(args: ProbeArgs) -> Result<()> {
    let container = DefaultAppContainer::new();
    let duration = container
        .probe_port()
        .probe_duration(&args.input)
        .await
        .with_context(|| format!("Failed to probe {}", args.input.display()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&ProbeOutput {
            input: &args.input,
            duration,
        })
        .context("Failed to serialize probe result to JSON")?;
        println!("{}", json);
    } else {
        println!("{}: {:.3}s", args.input.display(), duration);
    }

    Ok(())
}

/// Defaults, file and environment, then the command-line overrides
fn resolve_config(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<SplitterConfig, SplitXError> {
    let mut config = ConfigLoader::from_process_env().load(config_path)?;
    let applied = overrides.apply(&mut config);
    if applied > 0 {
        info!("Applied {} command-line overrides", applied);
    }
    Ok(config)
}

/// Process exit code for a failed command
pub fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<SplitXError>() {
            return match err {
                SplitXError::Domain(domain) => domain_exit_code(domain),
                SplitXError::AllFilesFailed { .. } => 3,
                SplitXError::InvalidArgument { .. }
                | SplitXError::ConfigRead { .. }
                | SplitXError::ConfigParse { .. }
                | SplitXError::InvalidEnvOverride { .. } => 2,
                _ => 1,
            };
        }
        if let Some(domain) = cause.downcast_ref::<DomainError>() {
            return domain_exit_code(domain);
        }
    }
    1
}

fn domain_exit_code(err: &DomainError) -> u8 {
    match err {
        DomainError::InvalidConfig(_) => 2,
        DomainError::NoInputFiles(_) => 4,
        _ => 1,
    }
}
