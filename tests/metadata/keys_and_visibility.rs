use super::{CRUD, single_resource_catalog, summarize, ty};
use odata_discovery::catalog::{Member, StructuredType};
use odata_discovery::metadata::inspect::TypeInfo;

fn account(members: Vec<Member>) -> TypeInfo {
    let entity = members
        .into_iter()
        .fold(StructuredType::new("Account"), StructuredType::member);
    summarize(&single_resource_catalog(entity, &CRUD, &CRUD))
        .entity_type("global.Account")
        .cloned()
        .unwrap()
}

#[test]
fn test_hidden_key_is_still_advertised() {
    let info = account(vec![
        Member::new("Id", ty("guid")).key().hidden(),
        Member::new("Balance", ty("decimal")),
    ]);

    assert_eq!(info.key.as_deref(), Some("Id"));
    assert_eq!(info.property("Id").unwrap().property_type, "Edm.Guid");
}

#[test]
fn test_hidden_non_key_member_is_absent() {
    let info = account(vec![
        Member::new("Id", ty("i64")).key(),
        Member::new("PasswordHash", ty("binary")).hidden(),
    ]);

    assert!(info.property("PasswordHash").is_none());
    assert!(info.property("Id").is_some());
}

#[test]
fn test_first_key_candidate_wins() {
    let info = account(vec![
        Member::new("Label", ty("string")),
        Member::new("Number", ty("i32")).key(),
        Member::new("Code", ty("string")).key().hidden(),
    ]);

    assert_eq!(info.key.as_deref(), Some("Number"));
    // the losing candidate is just a hidden member
    assert!(info.property("Code").is_none());
}

#[test]
fn test_keyless_type_has_no_key_element() {
    let info = account(vec![Member::new("Label", ty("string"))]);
    assert!(info.key.is_none());
    assert_eq!(info.properties.len(), 1);
}

#[test]
fn test_permission_annotations() {
    let info = account(vec![
        Member::new("Id", ty("i32")).key().read_only(),
        Member::new("Pin", ty("string")).write_only(),
        Member::new("Both", ty("string")).read_only().write_only(),
        Member::new("Plain", ty("string")),
    ]);

    let permission = |name: &str| info.property(name).unwrap().permission.clone();
    assert_eq!(permission("Id").as_deref(), Some("Org.OData.Core.V1.Permission/Read"));
    assert_eq!(permission("Pin").as_deref(), Some("Org.OData.Core.V1.Permission/Write"));
    assert_eq!(permission("Both").as_deref(), Some("Org.OData.Core.V1.Permission/Read"));
    assert_eq!(permission("Plain"), None);
}
