use anyhow::Result;
use clap::Parser;
use log::info;

mod cli;

use cli::{Cli, Commands};
use odata_discovery::config::Config;

fn main() -> Result<()> {
    // Before the logger, so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("odata-discovery.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let config = Config::load()?;

    let cli = Cli::parse();
    info!("Starting odata-discovery");

    match cli.command {
        Commands::Metadata(args) => cli::commands::handle_metadata_command(args, &config),
        Commands::Services(args) => cli::commands::handle_services_command(args, &config),
        Commands::Inspect(args) => cli::commands::handle_inspect_command(args),
    }
}
