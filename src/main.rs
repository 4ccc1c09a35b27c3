//! kitmatch - Build artifact reuse matching
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use kitmatch::cli::{Cli, Commands};
use kitmatch::config::ConfigManager;
use kitmatch::error::KitmatchResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> KitmatchResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await?;

    // 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("kitmatch=warn"),
        1 => EnvFilter::new("kitmatch=info"),
        _ => EnvFilter::new("kitmatch=debug"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();
    if config.general.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    debug!("Using config {}", config_manager.path().display());

    match cli.command {
        Commands::Lookup(args) => kitmatch::cli::commands::lookup(args, &config).await,
        Commands::Compare(args) => kitmatch::cli::commands::compare(args, &config).await,
        Commands::Catalog(args) => kitmatch::cli::commands::catalog(args, &config).await,
        Commands::Config(args) => {
            kitmatch::cli::commands::config(args, &config, &config_manager).await
        }
    }
}
