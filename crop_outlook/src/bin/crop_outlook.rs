//! Command line front end for the resolution service
//!
//! ```bash
//! # Resolve years given as arguments
//! crop-outlook 1965 2030
//!
//! # Resolve one year per line from stdin, as JSON
//! printf '1990\nabc\n' | crop-outlook --json
//! ```

use anyhow::Context;
use clap::Parser;
use crop_outlook::resolution::write_result;
use crop_outlook::{logging, OutlookConfig, ResolutionService};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crop-outlook")]
#[command(version)]
#[command(about = "Look up historical or forecast rice production for a year")]
struct Cli {
    /// Years to resolve; one per line is read from stdin when none are given
    years: Vec<String>,

    /// CSV dataset with Year and Value columns (overrides CROP_DATASET_PATH)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// JSON model artifact (overrides CROP_MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Default log filter (overrides CROP_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Print each result as a JSON object
    #[arg(long)]
    json: bool,

    /// Exit if the dataset or model cannot be loaded instead of degrading
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = OutlookConfig::from_env()?;
    if let Some(dataset) = cli.dataset {
        config.dataset_path = dataset;
    }
    if let Some(model) = cli.model {
        config.model_path = model;
    }
    if let Some(log) = cli.log {
        config.log_filter = log;
    }

    logging::init(&config.log_filter);
    tracing::info!("crop-outlook v{}", crop_outlook::VERSION);

    let service = if cli.strict {
        ResolutionService::load_strict(&config).context("failed to load service collaborators")?
    } else {
        ResolutionService::from_config(&config)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.years.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            write_result(&mut out, &service.resolve(&line), cli.json)?;
        }
    } else {
        for year in &cli.years {
            write_result(&mut out, &service.resolve(year), cli.json)?;
        }
    }

    Ok(())
}
