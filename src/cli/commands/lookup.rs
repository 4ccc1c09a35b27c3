//! Lookup command - find reusable artifacts for a build request

use crate::cli::args::{LookupArgs, OutputFormat};
use crate::cli::commands::read_json;
use crate::config::Config;
use crate::error::KitmatchResult;
use crate::lookup::{ArtifactLookup, LookupContext, LookupKey, MemoryStore, StaticResolver};
use crate::model::{Artifact, ArtifactPhase, BuildRequest};
use crate::ui::{self, UiContext};
use console::style;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Execute the lookup command
pub async fn execute(args: LookupArgs, config: &Config) -> KitmatchResult<()> {
    let request: BuildRequest = read_json(&args.request, "build request").await?;
    let store = MemoryStore::from_file(&args.artifacts).await?;
    debug!("Looking up {} among {} artifacts", request.name, store.len());

    let resolver = StaticResolver::new(
        config
            .lookup
            .namespaces
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<HashMap<_, _>>(),
    );
    let lookup = ArtifactLookup::new(Box::new(store), Box::new(resolver), config.matcher());

    let mut ctx = LookupContext::background();
    let timeout = match args.timeout {
        Some(0) => None,
        Some(secs) => Some(Duration::from_secs(secs)),
        None => config.lookup.timeout(),
    };
    if let Some(timeout) = timeout {
        ctx = ctx.with_timeout(timeout);
    }

    let namespace = lookup.resolve_namespace(&ctx, &request).await?;
    if args.show_key {
        let key = LookupKey::new(namespace.as_str(), &request)?;
        match args.format {
            OutputFormat::Table => ui::key_value(&UiContext::detect(), "Cache key", &key.to_string()),
            OutputFormat::Json | OutputFormat::Plain => eprintln!("{}", key),
        }
    }

    let found = lookup
        .find_in(&ctx, &namespace, &request, &args.selector)
        .await?;

    if found.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                ui::step_info(&UiContext::detect(), "No reusable artifacts");
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&found),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&found)?),
        OutputFormat::Plain => {
            for artifact in &found {
                println!("{}", artifact.name);
            }
        }
    }

    Ok(())
}

fn print_table(artifacts: &[Artifact]) {
    println!(
        "{:<32} {:<10} {:<22} {:<12}",
        style("NAME").bold(),
        style("KIND").bold(),
        style("PHASE").bold(),
        style("VERSION").bold()
    );
    println!("{}", "-".repeat(78));

    for artifact in artifacts {
        let phase = match artifact.phase {
            ArtifactPhase::Ready => style(artifact.phase.to_string()).green(),
            _ => style(artifact.phase.to_string()).yellow(),
        };

        println!(
            "{:<32} {:<10} {:<22} {:<12}",
            artifact.name,
            artifact.kind,
            phase,
            artifact.version.as_deref().unwrap_or("-")
        );
    }

    println!();
    println!("{} reusable artifact(s)", artifacts.len());
}
