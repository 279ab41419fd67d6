use odata_discovery::catalog::{
    AccessScope, Catalog, CatalogProvider, EntityResource, FileCatalog, Operation, TypeDescriptor,
};
use odata_discovery::service::{self, ServiceDocument};
use serde_json::{Value, json};
use std::fs;

fn widget_catalog() -> Catalog {
    Catalog::builder()
        .resource(EntityResource::new(
            "Widget",
            TypeDescriptor::object("Widget"),
            [Operation::Read, Operation::Create],
        ))
        .resource(
            EntityResource::new(
                "RESTar.Meta",
                TypeDescriptor::object("RESTar.Meta"),
                [Operation::Read],
            )
            .meta(),
        )
        .scope(
            AccessScope::new()
                .grant("Widget", [Operation::Read])
                .grant("RESTar.Meta", [Operation::Read]),
        )
        .build()
}

#[test]
fn test_widget_service_document() {
    let document = ServiceDocument::from_catalog(&widget_catalog());
    let entries = document.entries();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Widget");
    assert_eq!(entries[0].kind, "EntitySet");
    assert_eq!(entries[0].url, "Widget");
}

#[test]
fn test_json_output() {
    let document = ServiceDocument::from_catalog(&widget_catalog());
    let parsed: Value = serde_json::from_str(&document.to_json(true).unwrap()).unwrap();

    assert_eq!(
        parsed,
        json!({
            "@odata.context": "$metadata",
            "value": [{"name": "Widget", "kind": "EntitySet", "url": "Widget"}]
        })
    );
    assert_eq!(document.to_json(false).unwrap(), serde_json::to_string(&parsed).unwrap());
    assert!(service::CONTENT_TYPE.starts_with("application/json"));
}

#[test]
fn test_entries_follow_catalog_order() {
    let catalog = Catalog::builder()
        .resource(EntityResource::new("Zebra", TypeDescriptor::object("Zebra"), [Operation::Read]))
        .resource(EntityResource::new("Apple", TypeDescriptor::object("Apple"), [Operation::Read]))
        .resource(EntityResource::new(
            "Hidden",
            TypeDescriptor::object("Hidden"),
            [Operation::Read],
        ))
        .scope(
            AccessScope::new()
                .grant("Zebra", [Operation::Read])
                .grant("Apple", [Operation::Read]),
        )
        .build();

    let names: Vec<String> = service::list_resources(&catalog)
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, vec!["Zebra", "Apple"]);
}

#[test]
fn test_file_catalog_scopes_per_caller() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
            "resources": [
                {"name": "Widget", "type": "Widget", "operations": ["read", "create"]},
                {"name": "Audit", "type": "Audit", "operations": ["read"]}
            ],
            "scopes": {
                "admin": {"Widget": ["read", "create"], "Audit": ["read"]},
                "*": {"Widget": ["read"]}
            }
        }"#,
    )
    .unwrap();

    let provider = FileCatalog::new(&path);
    let names = |caller: &str| -> Vec<String> {
        service::list_resources(&provider.snapshot(caller).unwrap())
            .into_iter()
            .map(|entry| entry.name)
            .collect()
    };

    assert_eq!(names("admin"), vec!["Widget", "Audit"]);
    assert_eq!(names("guest"), vec!["Widget"]);
}
