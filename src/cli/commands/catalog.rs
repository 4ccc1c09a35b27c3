//! Catalog command - list features and their matching behavior

use crate::cli::args::{CatalogArgs, OutputFormat};
use crate::config::Config;
use crate::error::KitmatchResult;
use crate::features::FeatureDescriptor;
use console::style;

/// Execute the catalog command
pub async fn execute(args: CatalogArgs, config: &Config) -> KitmatchResult<()> {
    let catalog = config.catalog();

    match args.format {
        OutputFormat::Table => print_table(catalog.descriptors()),
        OutputFormat::Json => print_json(catalog.descriptors())?,
        OutputFormat::Plain => {
            for descriptor in catalog.descriptors() {
                println!("{}", descriptor.id());
            }
        }
    }

    Ok(())
}

fn print_table(descriptors: &[FeatureDescriptor]) {
    println!(
        "{:<16} {:<18} {:<10}",
        style("FEATURE").bold(),
        style("INFLUENCES BUILD").bold(),
        style("COMPARISON").bold()
    );
    println!("{}", "-".repeat(46));

    for descriptor in descriptors {
        let influences = if descriptor.influences_build() {
            style("yes").green()
        } else {
            style("no").dim()
        };
        println!(
            "{:<16} {:<18} {:<10}",
            descriptor.id(),
            influences,
            descriptor.comparison().name()
        );
    }
}

fn print_json(descriptors: &[FeatureDescriptor]) -> KitmatchResult<()> {
    #[derive(serde::Serialize)]
    struct FeatureJson<'a> {
        id: &'a str,
        influences_build: bool,
        comparison: &'static str,
    }

    let features: Vec<FeatureJson<'_>> = descriptors
        .iter()
        .map(|d| FeatureJson {
            id: d.id(),
            influences_build: d.influences_build(),
            comparison: d.comparison().name(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&features)?);
    Ok(())
}
