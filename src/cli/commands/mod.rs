pub mod inspect;
pub mod metadata;
pub mod services;

pub use inspect::{InspectCommands, handle_inspect_command};
pub use metadata::{MetadataCommands, handle_metadata_command};
pub use services::{ServicesCommands, handle_services_command};

use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use odata_discovery::catalog::{Catalog, CatalogProvider, FileCatalog};
use odata_discovery::config::{CATALOG_ENV_VAR, Config};
use std::path::PathBuf;

/// Where the catalog comes from and who is asking
#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog definition file (.toml or .json)
    #[arg(short, long, help = "Path to catalog definition file")]
    pub catalog: Option<PathBuf>,

    /// Caller whose access scope applies
    #[arg(long, help = "Caller identity used to pick the access scope")]
    pub caller: Option<String>,
}

impl CatalogArgs {
    /// Loads the snapshot for the requested caller. Flags beat the
    /// environment, which beats the config file.
    pub fn snapshot(&self, config: &Config) -> Result<Catalog> {
        let path = self
            .catalog
            .clone()
            .or_else(|| config.catalog_path())
            .with_context(|| {
                format!(
                    "No catalog given: use --catalog, set {} or settings.catalog_path",
                    CATALOG_ENV_VAR
                )
            })?;

        let caller = self
            .caller
            .as_deref()
            .unwrap_or(&config.get_settings().default_caller);

        debug!("Using catalog {} for caller '{}'", path.display(), caller);
        FileCatalog::new(path).snapshot(caller)
    }
}
