//! Memoised metadata documents
//!
//! A document depends only on the catalog snapshot, and a snapshot is fully
//! identified by the catalog version plus the caller's access scope. Callers
//! that share both share a document. Storing a newer version evicts every
//! older one.

use super::{MetadataDocument, MetadataDocumentBuilder};
use crate::catalog::AccessScope;
use anyhow::Result;
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    version: u64,
    scope: AccessScope,
    indent: usize,
}

#[derive(Debug, Default)]
pub struct DocumentCache {
    entries: RwLock<HashMap<CacheKey, Arc<MetadataDocument>>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached document for the builder's snapshot, rendering and
    /// storing it on a miss
    pub fn get_or_render(
        &self,
        builder: &MetadataDocumentBuilder<'_>,
    ) -> Result<Arc<MetadataDocument>> {
        let catalog = builder.catalog();
        let key = CacheKey {
            version: catalog.version(),
            scope: catalog.scope().clone(),
            indent: builder.indentation(),
        };

        if let Some(document) = self.read().get(&key) {
            debug!("Metadata cache hit for catalog version {}", key.version);
            return Ok(Arc::clone(document));
        }

        debug!("Metadata cache miss for catalog version {}", key.version);
        let document = Arc::new(builder.render()?);
        let mut entries = self.write();
        let version = key.version;
        let before = entries.len();
        entries.retain(|cached, _| cached.version >= version);
        if entries.len() < before {
            debug!(
                "Evicted {} stale metadata documents older than version {}",
                before - entries.len(),
                version
            );
        }
        // a stale snapshot still renders, but isn't kept behind a newer one
        if entries.keys().all(|cached| cached.version == version) {
            entries.entry(key).or_insert_with(|| Arc::clone(&document));
        }
        Ok(document)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<CacheKey, Arc<MetadataDocument>>> {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<CacheKey, Arc<MetadataDocument>>> {
        self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
