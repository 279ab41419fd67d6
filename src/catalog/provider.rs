//! Catalog retrieval
//!
//! The renderers only ever see a finished [`Catalog`]. Where it comes from is
//! up to a [`CatalogProvider`]; this module ships a file-backed one and a
//! static one.

use super::{AccessScope, Catalog, EntityResource, EnumType, OperationSet, StructuredType};
use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Scope key applied to callers without an entry of their own
pub const DEFAULT_SCOPE: &str = "*";

pub trait CatalogProvider {
    /// Builds the immutable snapshot seen by `caller`. Fails when the catalog
    /// can't be read or the caller isn't allowed to see it.
    fn snapshot(&self, caller: &str) -> Result<Catalog>;
}

/// Hands out clones of a prebuilt snapshot regardless of caller
#[derive(Debug, Clone)]
pub struct StaticCatalog(Catalog);

impl StaticCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self(catalog)
    }
}

impl CatalogProvider for StaticCatalog {
    fn snapshot(&self, _caller: &str) -> Result<Catalog> {
        Ok(self.0.clone())
    }
}

/// Catalog as written in a TOML or JSON file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogDefinition {
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub resources: Vec<EntityResource>,
    #[serde(default)]
    pub enums: Vec<EnumType>,
    #[serde(default)]
    pub complex_types: Vec<StructuredType>,
    #[serde(default)]
    pub entity_types: Vec<StructuredType>,
    /// caller -> resource -> permitted operations
    #[serde(default)]
    pub scopes: BTreeMap<String, BTreeMap<String, OperationSet>>,
}

impl CatalogDefinition {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse catalog TOML")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse catalog JSON")
    }

    pub fn snapshot(&self, caller: &str) -> Result<Catalog> {
        let scope = self
            .scopes
            .get(caller)
            .or_else(|| self.scopes.get(DEFAULT_SCOPE))
            .with_context(|| format!("Caller '{}' is not authorized to read the catalog", caller))?;

        debug!("Building catalog snapshot for caller '{}'", caller);

        let mut builder = Catalog::builder()
            .version(self.version)
            .scope(AccessScope::from(scope.clone()));
        for resource in &self.resources {
            builder = builder.resource(resource.clone());
        }
        for enum_type in &self.enums {
            builder = builder.enum_type(enum_type.clone());
        }
        for complex_type in &self.complex_types {
            builder = builder.complex_type(complex_type.clone());
        }
        for entity_type in &self.entity_types {
            builder = builder.entity_type(entity_type.clone());
        }

        Ok(builder.build())
    }
}

/// Reads the catalog definition from disk on every snapshot
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load_definition(&self) -> Result<CatalogDefinition> {
        if !self.path.exists() {
            bail!("Catalog file does not exist: {}", self.path.display());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read catalog file: {}", self.path.display()))?;

        let definition = match self.path.extension().and_then(|e| e.to_str()) {
            Some("json") => CatalogDefinition::from_json_str(&content),
            Some("toml") => CatalogDefinition::from_toml_str(&content),
            other => bail!(
                "Unsupported catalog format '{}' for {} (expected .toml or .json)",
                other.unwrap_or(""),
                self.path.display()
            ),
        }
        .with_context(|| format!("Invalid catalog file: {}", self.path.display()))?;

        info!(
            "Loaded catalog {} with {} resources",
            self.path.display(),
            definition.resources.len()
        );
        Ok(definition)
    }
}

impl CatalogProvider for FileCatalog {
    fn snapshot(&self, caller: &str) -> Result<Catalog> {
        self.load_definition()?.snapshot(caller)
    }
}
