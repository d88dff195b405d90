//! Nex-Harvest main entry point
//!
//! This is the command-line interface for the Nex-Harvest search service.

use anyhow::Context;
use clap::Parser;
use nex_harvest::config::{load_config_with_hash, validate_config, Config};
use nex_harvest::crawler::SearchService;
use nex_harvest::models::SearchRequest;
use nex_harvest::server::run_server;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Nex-Harvest: a music search extraction service
///
/// Serves `GET /search` over HTTP, or runs a single search when `--query`
/// is given and prints the JSON result.
#[derive(Parser, Debug)]
#[command(name = "nex-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A music search extraction service", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Address to listen on, overriding the configuration file
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// Run one search, print the result and exit
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Listing page for --query (1 to 5)
    #[arg(long, requires = "query")]
    page: Option<i64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(bind) = cli.bind {
        config.server.bind = bind;
        validate_config(&config).context("Invalid --bind address")?;
    }

    match cli.query {
        Some(query) => handle_query(config, query, cli.page).await,
        None => {
            run_server(config).await?;
            Ok(())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("nex_harvest=info,warn"),
            1 => EnvFilter::new("nex_harvest=debug,info"),
            2 => EnvFilter::new("nex_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles --query: one search printed as the JSON the HTTP endpoint returns
async fn handle_query(config: Config, query: String, page: Option<i64>) -> anyhow::Result<()> {
    let request = SearchRequest::new(query, page)?;
    let service = SearchService::new(config.site)?;

    let envelopes = service.search(&request.query, request.page).await?;
    println!("{}", serde_json::to_string_pretty(&envelopes)?);

    Ok(())
}
