use super::commands::{InspectCommands, MetadataCommands, ServicesCommands};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "odata-discovery")]
#[command(about = "Render OData service and metadata documents for a resource catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the CSDL metadata document ($metadata)
    Metadata(MetadataCommands),
    /// List the service document entries
    Services(ServicesCommands),
    /// Summarise a rendered metadata document
    Inspect(InspectCommands),
}
