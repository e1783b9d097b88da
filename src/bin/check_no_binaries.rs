// file: src/bin/check_no_binaries.rs
// description: commandline entry point for the tracked binary file check
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use repo_hygiene::utils::logging::{init_logger, resolve_color};
use repo_hygiene::{Config, RepoScanner, ScanReport};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

const ENVIRONMENT_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "check-no-binaries")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Fail when tracked files contain binary-like content", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", env = "REPO_HYGIENE_CONFIG")]
    config: Option<PathBuf>,

    /// Working copy to scan, overriding scanner.repo_root
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let color = resolve_color(cli.color);
    init_logger(color, cli.verbose);

    let mut config =
        Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(root) = cli.root {
        config.scanner.repo_root = root;
    }

    let scanner = RepoScanner::new(config.scanner);
    // Exit 1 is reserved for "binaries found".
    let results = match scanner.scan() {
        Ok(results) => results,
        Err(err) => {
            eprintln!(
                "Error: Failed to list tracked files in {}: {}",
                scanner.root().display(),
                err
            );
            return Ok(ExitCode::from(ENVIRONMENT_FAILURE));
        }
    };

    let report = ScanReport::from_results(&results);
    println!("{}", report.render(color));

    info!("Scan finished with exit code {}", report.exit_code());
    Ok(ExitCode::from(report.exit_code()))
}
