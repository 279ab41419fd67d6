//! OData service document: the flat list of addressable entity sets

use crate::catalog::Catalog;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Value, json};

/// Kind reported for every entry
pub const ENTITY_SET_KIND: &str = "EntitySet";

/// Content type the JSON service document is served with
pub const CONTENT_TYPE: &str = "application/json;odata.metadata=minimal";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    pub name: String,
    pub kind: &'static str,
    pub url: String,
}

/// One entry per advertised entity resource, in catalog order
pub fn list_resources(catalog: &Catalog) -> Vec<ServiceEntry> {
    catalog
        .advertised_resources()
        .map(|resource| ServiceEntry {
            name: resource.name.clone(),
            kind: ENTITY_SET_KIND,
            url: resource.name.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDocument {
    entries: Vec<ServiceEntry>,
}

impl ServiceDocument {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            entries: list_resources(catalog),
        }
    }

    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    pub fn to_json_value(&self) -> Value {
        json!({
            "@odata.context": "$metadata",
            "value": self.entries,
        })
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let value = self.to_json_value();
        let json = if pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        json.context("Failed to serialize service document")
    }
}
