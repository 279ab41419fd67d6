//! `metadata` command: render the CSDL document

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use odata_discovery::config::Config;
use odata_discovery::metadata::MetadataDocumentBuilder;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use super::CatalogArgs;

#[derive(Args)]
pub struct MetadataCommands {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Write the document to a file instead of stdout
    #[arg(short, long, help = "Save document to file")]
    pub output: Option<PathBuf>,

    /// Spaces per nesting level (0 for a single line)
    #[arg(long, help = "Indentation width")]
    pub indent: Option<usize>,
}

pub fn handle_metadata_command(args: MetadataCommands, config: &Config) -> Result<()> {
    let catalog = args.catalog.snapshot(config)?;
    let indent = args.indent.unwrap_or(config.get_settings().indent);
    let builder = MetadataDocumentBuilder::new(&catalog).indent(indent);

    match args.output {
        Some(path) => {
            let document = builder.render()?;
            fs::write(&path, document.body())
                .with_context(|| format!("Failed to write metadata document: {}", path.display()))?;
            eprintln!(
                "{} {} ({})",
                "Metadata written to".green(),
                path.display().to_string().cyan(),
                document.content_type().dimmed()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut out = builder.write_to(stdout.lock())?;
            writeln!(out).context("Failed to write metadata document")?;
        }
    }

    Ok(())
}
