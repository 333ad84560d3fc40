//! mdc-harvest main entry point
//!
//! This is the command-line interface for the rule harvester.

use clap::Parser;
use mdc_harvest::config::{load_config_with_hash, Config};
use mdc_harvest::output::print_report;
use mdc_harvest::pipeline;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// mdc-harvest: coding standards to rule files
///
/// Crawls a documentation site below a path prefix, extracts one rule per
/// heading, and writes each rule to its own `.mdc` file, touching a file
/// only when its content changed. Runs against the Drupal coding standards
/// when no configuration is given.
#[derive(Parser, Debug)]
#[command(name = "mdc-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Harvest coding-standard rules into .mdc files", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory to write rule files to (overrides the configuration)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Crawl and extract, report what would change, write nothing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if let Some(dir) = cli.output_dir {
        config.output.directory = dir.display().to_string();
    }

    let report = match pipeline::run(&config, cli.dry_run).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            return Err(e.into());
        }
    };

    if !cli.quiet {
        print_report(&report);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("mdc_harvest=info,warn"),
            1 => EnvFilter::new("mdc_harvest=debug,info"),
            2 => EnvFilter::new("mdc_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
