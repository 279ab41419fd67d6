//! Resource catalog snapshots
//!
//! A [`Catalog`] is built fresh per discovery request from the live resource
//! registry and the caller's identity, and is read-only from then on. The
//! renderers in [`crate::metadata`] and [`crate::service`] take it by
//! reference and never reach for any ambient registry.

pub mod members;
pub mod provider;
pub mod types;

pub use members::{EnumMember, EnumType, Member, MemberType, StructuredType};
pub use provider::{CatalogDefinition, CatalogProvider, FileCatalog, StaticCatalog};
pub use types::{Primitive, TypeDescriptor};

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
    Report,
}

pub type OperationSet = BTreeSet<Operation>;

/// An addressable resource backed by an entity type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct EntityResource {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: TypeDescriptor,
    pub operations: OperationSet,
    /// The resource describing the catalog itself
    #[serde(default)]
    pub meta: bool,
}

impl EntityResource {
    pub fn new(
        name: impl Into<String>,
        entity_type: TypeDescriptor,
        operations: impl IntoIterator<Item = Operation>,
    ) -> Self {
        Self {
            name: name.into(),
            entity_type,
            operations: operations.into_iter().collect(),
            meta: false,
        }
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// Operations the requesting caller may perform, per resource name
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessScope(BTreeMap<String, OperationSet>);

impl AccessScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(
        mut self,
        resource: impl Into<String>,
        operations: impl IntoIterator<Item = Operation>,
    ) -> Self {
        self.0
            .entry(resource.into())
            .or_default()
            .extend(operations);
        self
    }

    pub fn allowed(&self, resource: &str) -> Option<&OperationSet> {
        self.0.get(resource)
    }
}

impl From<BTreeMap<String, OperationSet>> for AccessScope {
    fn from(map: BTreeMap<String, OperationSet>) -> Self {
        Self(map)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    version: u64,
    entity_resources: Vec<EntityResource>,
    enum_types: Vec<EnumType>,
    complex_types: Vec<StructuredType>,
    entity_types: Vec<StructuredType>,
    scope: AccessScope,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Changes whenever the registry behind the catalog changes
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn entity_resources(&self) -> &[EntityResource] {
        &self.entity_resources
    }

    /// Entity resources that get advertised, i.e. everything but the
    /// catalog's own meta-resource
    pub fn advertised_resources(&self) -> impl Iterator<Item = &EntityResource> {
        self.entity_resources.iter().filter(|r| !r.meta)
    }

    pub fn enum_types(&self) -> &[EnumType] {
        &self.enum_types
    }

    pub fn complex_types(&self) -> &[StructuredType] {
        &self.complex_types
    }

    pub fn entity_types(&self) -> &[StructuredType] {
        &self.entity_types
    }

    pub fn scope(&self) -> &AccessScope {
        &self.scope
    }

    /// The resource's enabled operations intersected with the caller's scope
    pub fn effective_operations(&self, resource: &EntityResource) -> OperationSet {
        effective_operations(resource, &self.scope)
    }
}

fn effective_operations(resource: &EntityResource, scope: &AccessScope) -> OperationSet {
    match scope.allowed(&resource.name) {
        Some(allowed) => resource.operations.intersection(allowed).copied().collect(),
        None => OperationSet::new(),
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn version(mut self, version: u64) -> Self {
        self.catalog.version = version;
        self
    }

    pub fn resource(mut self, resource: EntityResource) -> Self {
        self.catalog.entity_resources.push(resource);
        self
    }

    pub fn enum_type(mut self, enum_type: EnumType) -> Self {
        self.catalog.enum_types.push(enum_type);
        self
    }

    pub fn complex_type(mut self, complex_type: StructuredType) -> Self {
        self.catalog.complex_types.push(complex_type);
        self
    }

    pub fn entity_type(mut self, entity_type: StructuredType) -> Self {
        self.catalog.entity_types.push(entity_type);
        self
    }

    pub fn scope(mut self, scope: AccessScope) -> Self {
        self.catalog.scope = scope;
        self
    }

    /// Finishes the snapshot. Resources the caller has no effective
    /// operations on are dropped here, so renderers never see them, and so
    /// are entity types that only back dropped resources.
    pub fn build(mut self) -> Catalog {
        let scope = &self.catalog.scope;
        let (retained, dropped): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.catalog.entity_resources)
                .into_iter()
                .partition(|resource| !effective_operations(resource, scope).is_empty());

        for resource in &dropped {
            debug!("Dropping resource '{}': no effective operations", resource.name);
        }

        self.catalog.entity_types.retain(|entity_type| {
            let descriptor = entity_type.descriptor();
            let hidden = backs(&dropped, &descriptor) && !backs(&retained, &descriptor);
            if hidden {
                debug!("Dropping entity type '{}': backs no visible resource", entity_type.name);
            }
            !hidden
        });

        self.catalog.entity_resources = retained;
        self.catalog
    }
}

fn backs(resources: &[EntityResource], descriptor: &TypeDescriptor) -> bool {
    resources.iter().any(|resource| resource.entity_type == *descriptor)
}
