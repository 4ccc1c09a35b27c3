//! Compare command - check whether two artifacts are duplicates

use crate::cli::args::CompareArgs;
use crate::cli::commands::read_json;
use crate::config::Config;
use crate::error::KitmatchResult;
use crate::model::Artifact;

/// Execute the compare command
pub async fn execute(args: CompareArgs, config: &Config) -> KitmatchResult<()> {
    let first: Artifact = read_json(&args.first, "artifact").await?;
    let second: Artifact = read_json(&args.second, "artifact").await?;

    let equivalent = config.matcher().artifacts_equivalent(&first, &second)?;
    println!("{}", if equivalent { "equivalent" } else { "different" });

    Ok(())
}
