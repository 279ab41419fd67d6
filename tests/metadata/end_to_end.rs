use super::{CRUD, render, single_resource_catalog, summarize, widget_type};
use odata_discovery::catalog::{
    AccessScope, Catalog, CatalogProvider, EntityResource, EnumType, FileCatalog, Member,
    Operation, StaticCatalog, StructuredType, TypeDescriptor,
};
use odata_discovery::metadata::{DocumentCache, MetadataDocumentBuilder};
use std::fs;
use std::sync::Arc;

#[test]
fn test_widget_document() {
    let summary = summarize(&single_resource_catalog(widget_type(), &CRUD, &CRUD));

    let widget = summary.entity_type("global.Widget").unwrap();
    assert!(!widget.open);
    assert_eq!(widget.key.as_deref(), Some("Id"));

    let id = widget.property("Id").unwrap();
    assert_eq!(id.property_type, "Edm.Int32");
    assert!(!id.nullable);

    let name = widget.property("Name").unwrap();
    assert_eq!(name.property_type, "Edm.String");
    assert!(name.nullable);

    assert_eq!(
        widget.property("Tags").unwrap().property_type,
        "Collection(Edm.String)"
    );

    let set = summary.entity_set("Widget").unwrap();
    assert_eq!(set.entity_type, "global.Widget");
    assert!(set.capabilities.insertable);
    assert!(set.capabilities.updatable);
    assert!(set.capabilities.deletable);
}

#[test]
fn test_rendering_is_deterministic() {
    let catalog = single_resource_catalog(widget_type(), &CRUD, &CRUD);
    let first = MetadataDocumentBuilder::new(&catalog).render().unwrap();
    let second = MetadataDocumentBuilder::new(&catalog).render().unwrap();
    assert_eq!(first.body(), second.body());

    // an independently built equal snapshot renders the same bytes
    let rebuilt = single_resource_catalog(widget_type(), &CRUD, &CRUD);
    assert_eq!(render(&rebuilt), render(&catalog));
}

#[test]
fn test_compact_and_indented_documents_agree() {
    let catalog = single_resource_catalog(widget_type(), &CRUD, &[Operation::Read]);
    let compact = MetadataDocumentBuilder::new(&catalog).indent(0).render().unwrap();
    let indented = MetadataDocumentBuilder::new(&catalog).indent(4).render().unwrap();

    assert!(compact.body().len() < indented.body().len());
    let parse = |doc: &odata_discovery::metadata::MetadataDocument| {
        odata_discovery::metadata::inspect::parse_document(doc.as_str().unwrap()).unwrap()
    };
    assert_eq!(parse(&compact), parse(&indented));
}

#[test]
fn test_static_provider_snapshot() {
    let catalog = Catalog::builder()
        .version(7)
        .enum_type(EnumType::new("Shop.Color").member("Red", 0).member("Blue", 1))
        .complex_type(
            StructuredType::new("Shop.Address")
                .member(Member::new("Street", "string".parse().unwrap()))
                .member(Member::new("Extras", "map<string, any>".parse().unwrap())),
        )
        .entity_type(
            StructuredType::new("Shop.Order")
                .member(Member::new("Id", "i64".parse().unwrap()).key())
                .member(Member::new("Color", "enum:Shop.Color?".parse().unwrap()))
                .member(Member::new("ShipTo", "Shop.Address".parse().unwrap())),
        )
        .resource(EntityResource::new(
            "Orders",
            TypeDescriptor::object("Shop.Order"),
            [Operation::Read, Operation::Create],
        ))
        .scope(AccessScope::new().grant("Orders", CRUD))
        .build();

    let provider = StaticCatalog::new(catalog);
    let snapshot = provider.snapshot("anyone").unwrap();
    assert_eq!(snapshot.version(), 7);

    let summary = summarize(&snapshot);
    assert_eq!(summary.enum_types, vec!["global.Shop.Color".to_string()]);

    let address = &summary.complex_types[0];
    assert_eq!(address.name, "global.Shop.Address");
    assert!(address.open);

    let order = summary.entity_type("global.Shop.Order").unwrap();
    assert_eq!(order.property("Color").unwrap().property_type, "global.Shop.Color");
    assert!(order.property("Color").unwrap().nullable);
    assert_eq!(order.property("ShipTo").unwrap().property_type, "global.Shop.Address");

    let orders = summary.entity_set("Orders").unwrap();
    assert_eq!(orders.entity_type, "global.Shop.Order");
    assert!(orders.capabilities.insertable);
    assert!(!orders.capabilities.updatable);
}

#[test]
fn test_cache_shares_documents_between_equal_snapshots() {
    let provider = StaticCatalog::new(single_resource_catalog(widget_type(), &CRUD, &CRUD));
    let cache = DocumentCache::new();

    let alice = provider.snapshot("alice").unwrap();
    let bob = provider.snapshot("bob").unwrap();
    let a = cache.get_or_render(&MetadataDocumentBuilder::new(&alice)).unwrap();
    let b = cache.get_or_render(&MetadataDocumentBuilder::new(&bob)).unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.as_str().unwrap(), render(&alice));
}

#[test]
fn test_guest_never_sees_types_of_resources_it_cannot_use() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
            "resources": [
                {"name": "Widget", "type": "Widget", "operations": ["read", "create"]},
                {"name": "Secret", "type": "Secret", "operations": ["read"]}
            ],
            "entity_types": [
                {"name": "Widget", "members": [{"name": "Id", "type": "i32", "key": true}]},
                {"name": "Secret", "members": [{"name": "PinCode", "type": "string"}]}
            ],
            "scopes": {
                "admin": {"Widget": ["read"], "Secret": ["read"]},
                "*": {"Widget": ["read"]}
            }
        }"#,
    )
    .unwrap();
    let provider = FileCatalog::new(&path);

    let guest = provider.snapshot("guest").unwrap();
    let xml = render(&guest);
    let summary = summarize(&guest);
    assert_eq!(summary.entity_sets.len(), 1);
    assert!(summary.entity_type("global.Widget").is_some());
    assert!(summary.entity_type("global.Secret").is_none());
    assert!(!xml.contains("PinCode"));

    let admin = summarize(&provider.snapshot("admin").unwrap());
    assert_eq!(admin.entity_sets.len(), 2);
    assert!(admin.entity_type("global.Secret").unwrap().property("PinCode").is_some());
}
