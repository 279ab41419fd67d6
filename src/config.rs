use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides `settings.catalog_path` when set
pub const CATALOG_ENV_VAR: &str = "ODATA_DISCOVERY_CATALOG";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_caller")]
    pub default_caller: String,
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_caller() -> String {
    "anonymous".to_string()
}

fn default_indent() -> usize {
    crate::metadata::DEFAULT_INDENT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_caller: default_caller(),
            indent: default_indent(),
        }
    }
}

impl Config {
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("odata-discovery")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".odata-discovery")
        };
        Ok(config_dir)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config: {:?}", config.settings);
        Ok(config)
    }

    /// Catalog file to use when none is given on the command line
    pub fn catalog_path(&self) -> Option<PathBuf> {
        env::var_os(CATALOG_ENV_VAR)
            .map(PathBuf::from)
            .or_else(|| self.settings.catalog_path.clone())
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }
}
