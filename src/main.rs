//! Link-Census main entry point
//!
//! This is the command-line interface for the Link-Census crawler.

use anyhow::Context;
use clap::Parser;
use link_census::config::{load_config, validate, Config};
use link_census::crawler::crawl;
use link_census::output::{build_report, write_report};
use link_census::url::OriginPolicy;
use link_census::CensusError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Link-Census: count internal link references across a website
///
/// Crawls every page reachable from BASE_URL without leaving its origin and
/// prints how many times each page is linked to, grouped by count.
#[derive(Parser, Debug)]
#[command(name = "link-census")]
#[command(version)]
#[command(about = "Count internal link references across a website", long_about = None)]
struct Cli {
    /// Address to start crawling from; scheme and `.com` are added when missing
    #[arg(value_name = "BASE_URL")]
    seed: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Scheme prepended to a seed without one (overrides the config file)
    #[arg(long, value_name = "SCHEME")]
    default_scheme: Option<String>,

    /// Suffix appended to a seed without a dot (overrides the config file)
    #[arg(long, value_name = "SUFFIX")]
    default_suffix: Option<String>,

    /// Match links by normalized host instead of by raw seed prefix
    #[arg(long)]
    same_host: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_settings(&cli)?;

    match crawl(&config, &cli.seed).await {
        Ok(table) => {
            let report = build_report(&table);
            write_report(&report, &mut std::io::stdout().lock())
                .context("Failed to write report")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(CensusError::InvalidSeed { seed, reason }) => {
            tracing::debug!("Seed rejected: {}", reason);
            eprintln!("Invalid URL given: {}", seed);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_census=info,warn"),
            1 => EnvFilter::new("link_census=debug,info"),
            2 => EnvFilter::new("link_census=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, if any, and applies command-line overrides
fn load_settings(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(scheme) = &cli.default_scheme {
        config.crawler.default_scheme = scheme.clone();
    }
    if let Some(suffix) = &cli.default_suffix {
        config.crawler.default_suffix = suffix.clone();
    }
    if cli.same_host {
        config.crawler.origin_match = OriginPolicy::SameHost;
    }

    validate(&config).context("Invalid command-line overrides")?;

    Ok(config)
}
