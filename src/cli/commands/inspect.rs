//! `inspect` command: summarise a rendered metadata document

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use odata_discovery::metadata::inspect::{TypeInfo, parse_document, parse_entity_type};
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct InspectCommands {
    /// Metadata document to read
    #[arg(help = "Path to a metadata XML document")]
    pub file: PathBuf,

    /// Show a single entity type
    #[arg(short, long, help = "Entity type name (case-insensitive)")]
    pub entity: Option<String>,
}

pub fn handle_inspect_command(args: InspectCommands) -> Result<()> {
    let xml = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read metadata document: {}", args.file.display()))?;

    if let Some(entity) = args.entity {
        print_type(&parse_entity_type(&xml, &entity)?);
        return Ok(());
    }

    let summary = parse_document(&xml)?;
    println!(
        "{} enum types, {} complex types, {} entity types, {} entity sets",
        summary.enum_types.len(),
        summary.complex_types.len(),
        summary.entity_types.len(),
        summary.entity_sets.len()
    );

    for set in &summary.entity_sets {
        let flag = |label: &str, on: bool| {
            if on { label.green() } else { label.dimmed() }
        };
        println!(
            "{:<40} {:<40} {} {} {}",
            set.name.bold(),
            set.entity_type.cyan(),
            flag("insert", set.capabilities.insertable),
            flag("update", set.capabilities.updatable),
            flag("delete", set.capabilities.deletable)
        );
    }
    Ok(())
}

fn print_type(info: &TypeInfo) {
    let open = if info.open { " (open)" } else { "" };
    println!("{}{}", info.name.bold(), open.yellow());
    for property in &info.properties {
        let key = if info.key.as_deref() == Some(property.name.as_str()) { "*" } else { " " };
        let nullable = if property.nullable { "?" } else { "" };
        let permission = property
            .permission
            .as_deref()
            .and_then(|p| p.rsplit('/').next())
            .unwrap_or("");
        println!(
            " {} {:<30} {}{} {}",
            key.red(),
            property.name,
            property.property_type.cyan(),
            nullable,
            permission.dimmed()
        );
    }
}
