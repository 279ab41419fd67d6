//! `services` command: list the service document

use anyhow::Result;
use clap::Args;
use colored::*;
use odata_discovery::config::Config;
use odata_discovery::service::ServiceDocument;

use super::CatalogArgs;

#[derive(Args)]
pub struct ServicesCommands {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Print the OData JSON service document
    #[arg(long, help = "Output JSON service document")]
    pub json: bool,
}

pub fn handle_services_command(args: ServicesCommands, config: &Config) -> Result<()> {
    let catalog = args.catalog.snapshot(config)?;
    let document = ServiceDocument::from_catalog(&catalog);

    if args.json {
        println!("{}", document.to_json(true)?);
        return Ok(());
    }

    if document.entries().is_empty() {
        println!("{}", "No resources are visible to this caller".yellow());
        return Ok(());
    }

    for entry in document.entries() {
        println!("{:<40} {:<10} {}", entry.name.bold(), entry.kind.dimmed(), entry.url.cyan());
    }
    Ok(())
}
