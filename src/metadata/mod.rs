//! CSDL metadata document generation
//!
//! [`MetadataDocumentBuilder`] renders a [`Catalog`] snapshot as an
//! `edmx:Edmx` document in a single pass: type declarations from
//! [`SchemaRenderer`], then the container and trailer from
//! [`ContainerRenderer`]. The output is a pure function of the snapshot, so
//! identical snapshots always give byte-identical documents.
//!
//! # Examples
//! ```rust
//! use odata_discovery::catalog::{
//!     AccessScope, Catalog, EntityResource, Member, Operation, StructuredType, TypeDescriptor,
//! };
//! use odata_discovery::metadata::MetadataDocumentBuilder;
//!
//! let catalog = Catalog::builder()
//!     .resource(EntityResource::new(
//!         "Widget",
//!         TypeDescriptor::object("Widget"),
//!         [Operation::Read],
//!     ))
//!     .entity_type(StructuredType::new("Widget").member(Member::new("Id", "i32".parse()?).key()))
//!     .scope(AccessScope::new().grant("Widget", [Operation::Read]))
//!     .build();
//!
//! let document = MetadataDocumentBuilder::new(&catalog).render()?;
//! assert!(document.as_str()?.contains(r#"<EntitySet Name="Widget" EntityType="global.Widget">"#));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cache;
pub mod capabilities;
pub mod container;
pub mod inspect;
pub mod schema;
pub mod writer;

pub use cache::DocumentCache;
pub use capabilities::{Capabilities, annotate};
pub use container::ContainerRenderer;
pub use schema::{SchemaRenderer, SchemaStats};
pub use writer::XmlWriter;

use crate::catalog::Catalog;
use crate::edm::constants::{EDM_NAMESPACE, EDMX_NAMESPACE, EDMX_VERSION, SCHEMA_NAMESPACE};
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

/// Content type the metadata document is served with
pub const CONTENT_TYPE: &str = "application/xml";

/// Spaces per nesting level unless configured otherwise
pub const DEFAULT_INDENT: usize = 2;

/// A fully rendered metadata document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataDocument {
    body: Vec<u8>,
}

impl MetadataDocument {
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.body).context("Metadata document is not valid UTF-8")
    }
}

pub struct MetadataDocumentBuilder<'c> {
    catalog: &'c Catalog,
    indent: usize,
}

impl<'c> MetadataDocumentBuilder<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            indent: DEFAULT_INDENT,
        }
    }

    /// Spaces per nesting level, 0 for a single-line document
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn indentation(&self) -> usize {
        self.indent
    }

    /// Renders into an in-memory buffer
    pub fn render(&self) -> Result<MetadataDocument> {
        let body = self.write_to(Vec::new())?;
        Ok(MetadataDocument { body })
    }

    /// Streams the document into `out` and hands it back when done
    pub fn write_to<W: Write>(&self, out: W) -> Result<W> {
        let mut xml = XmlWriter::new(out, self.indent);

        xml.declaration()?;
        xml.add_opening_tag(
            "edmx:Edmx",
            &[("Version", EDMX_VERSION), ("xmlns:edmx", EDMX_NAMESPACE)],
        )?;
        xml.add_opening_tag("edmx:DataServices", &[])?;
        xml.add_opening_tag(
            "Schema",
            &[("Namespace", SCHEMA_NAMESPACE), ("xmlns", EDM_NAMESPACE)],
        )?;

        let stats = SchemaRenderer::new(self.catalog).render(&mut xml)?;
        let entity_sets = ContainerRenderer::new(self.catalog).render(&mut xml)?;

        xml.add_closing_tag("Schema")?;
        xml.add_closing_tag("edmx:DataServices")?;
        xml.add_closing_tag("edmx:Edmx")?;

        info!(
            "Rendered metadata document: {} enum types, {} complex types, \
             {} entity types, {} entity sets",
            stats.enum_types, stats.complex_types, stats.entity_types, entity_sets
        );

        let mut out = xml.into_inner();
        out.flush().context("Failed to flush metadata document")?;
        Ok(out)
    }
}
