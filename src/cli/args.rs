//! CLI argument definitions using clap derive

use crate::lookup::Requirement;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// kitmatch - Build artifact reuse matching
///
/// Decides whether previously built artifacts can satisfy a build request
/// instead of rebuilding.
#[derive(Parser, Debug)]
#[command(name = "kitmatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KITMATCH_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find artifacts reusable for a build request
    Lookup(LookupArgs),

    /// Check whether two artifacts are interchangeable
    Compare(CompareArgs),

    /// List known features and how they are matched
    Catalog(CatalogArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the lookup command
#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Build request (JSON)
    #[arg(short, long)]
    pub request: PathBuf,

    /// Artifact snapshot (JSON array)
    #[arg(short, long)]
    pub artifacts: PathBuf,

    /// Extra label selector (key=value, key!=value or key), repeatable
    #[arg(short, long, value_parser = Requirement::parse)]
    pub selector: Vec<Requirement>,

    /// Abort after N seconds (default: from config)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Print the cache key of the request
    #[arg(long)]
    pub show_key: bool,
}

/// Arguments for the compare command
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// First artifact (JSON); its missing version takes the default
    pub first: PathBuf,

    /// Second artifact (JSON)
    pub second: PathBuf,
}

/// Arguments for the catalog command
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
