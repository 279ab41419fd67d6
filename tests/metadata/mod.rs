/// Metadata document tests
///
/// Documents are rendered through the public builder and read back with
/// roxmltree, the way an OData client would see them.

pub mod end_to_end;
pub mod keys_and_visibility;
pub mod open_types;

use odata_discovery::catalog::{
    AccessScope, Catalog, EntityResource, Member, Operation, StructuredType, TypeDescriptor,
};
use odata_discovery::metadata::MetadataDocumentBuilder;
use odata_discovery::metadata::inspect::{DocumentSummary, parse_document};

pub const CRUD: [Operation; 4] = [
    Operation::Read,
    Operation::Create,
    Operation::Update,
    Operation::Delete,
];

pub fn ty(expr: &str) -> TypeDescriptor {
    expr.parse().unwrap()
}

/// `Widget` with `Id` (key), `Name` and `Tags`
pub fn widget_type() -> StructuredType {
    StructuredType::new("Widget")
        .member(Member::new("Id", ty("i32")).key().nullable(false))
        .member(Member::new("Name", ty("string")).nullable(true))
        .member(Member::new("Tags", ty("[string]")))
}

/// Single-resource catalog with the given entity type and caller scope
pub fn single_resource_catalog(
    entity_type: StructuredType,
    enabled: &[Operation],
    allowed: &[Operation],
) -> Catalog {
    let name = entity_type.name.clone();
    Catalog::builder()
        .resource(EntityResource::new(
            name.as_str(),
            entity_type.descriptor(),
            enabled.iter().copied(),
        ))
        .entity_type(entity_type)
        .scope(AccessScope::new().grant(name, allowed.iter().copied()))
        .build()
}

pub fn render(catalog: &Catalog) -> String {
    let document = MetadataDocumentBuilder::new(catalog).render().unwrap();
    assert_eq!(document.content_type(), "application/xml");
    document.as_str().unwrap().to_string()
}

pub fn summarize(catalog: &Catalog) -> DocumentSummary {
    parse_document(&render(catalog)).unwrap()
}
