// file: src/bin/generate_sample_transactions.rs
// description: commandline entry point for the synthetic transaction csv generator
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use repo_hygiene::utils::logging::{format_path, init_logger, resolve_color};
use repo_hygiene::{Config, SampleDataGenerator, samples};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "generate-sample-transactions")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Write randomized transaction rows for local testing", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", env = "REPO_HYGIENE_CONFIG")]
    config: Option<PathBuf>,

    /// Days of history before today
    #[arg(long, value_name = "NUM")]
    days: Option<u32>,

    #[arg(long, value_name = "NUM")]
    rows: Option<usize>,

    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    #[arg(long, value_name = "NAME")]
    file_name: Option<String>,

    /// Fixed seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let color = resolve_color(cli.color);
    init_logger(color, cli.verbose);

    let mut config =
        Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let generator_config = &mut config.generator;
    if let Some(days) = cli.days {
        generator_config.days = days;
    }
    if let Some(rows) = cli.rows {
        generator_config.rows = rows;
    }
    if let Some(output_dir) = cli.output_dir {
        generator_config.output_dir = output_dir;
    }
    if let Some(file_name) = cli.file_name {
        generator_config.file_name = file_name;
    }
    if cli.seed.is_some() {
        generator_config.seed = cli.seed;
    }
    config.validate().context("Invalid generator settings")?;

    let settings = &config.generator;
    info!(
        "Generating {} rows over {} days",
        settings.rows, settings.days
    );

    let mut generator = SampleDataGenerator::from_seed(settings.seed);
    let records = generator.generate(settings.days, settings.rows);

    let target = settings.output_path();
    let written = samples::write(&records, &target)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("wrote {}", format_path(&written, color));
    Ok(())
}
