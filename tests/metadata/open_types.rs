use super::{CRUD, single_resource_catalog, summarize, ty};
use odata_discovery::catalog::{Catalog, Member, StructuredType};

fn summarize_complex(complex: StructuredType) -> bool {
    let catalog = Catalog::builder().complex_type(complex).build();
    summarize(&catalog).complex_types[0].open
}

#[test]
fn test_closed_type_without_dynamic_members() {
    let order = StructuredType::new("Shop.Order")
        .member(Member::new("Id", ty("i64")).key())
        .member(Member::new("Total", ty("decimal")));

    let summary = summarize(&single_resource_catalog(order, &CRUD, &CRUD));
    assert!(!summary.entity_type("global.Shop.Order").unwrap().open);
}

#[test]
fn test_one_dynamic_member_opens_the_type() {
    let order = StructuredType::new("Shop.Order")
        .member(Member::new("Id", ty("i64")).key())
        .member(Member::new("Extras", ty("any")));

    let summary = summarize(&single_resource_catalog(order, &CRUD, &CRUD));
    let order = summary.entity_type("global.Shop.Order").unwrap();
    assert!(order.open);
    // dynamic members are implied by OpenType, never listed
    assert!(order.property("Extras").is_none());
    assert_eq!(order.properties.len(), 1);
}

#[test]
fn test_any_primitive_member_opens_complex_type() {
    assert!(!summarize_complex(
        StructuredType::new("Shop.Address").member(Member::new("Street", ty("string")))
    ));
    assert!(summarize_complex(
        StructuredType::new("Shop.Address").member(Member::new("Note", ty("primitive?")))
    ));
}

#[test]
fn test_dynamic_self_descriptor_opens_the_type() {
    assert!(summarize_complex(StructuredType::new("Shop.Bag").dynamic()));
}

#[test]
fn test_dynamic_resource_type_is_always_declared_open() {
    let summary = summarize(&Catalog::default());
    let dynamic = summary.entity_type("RESTar.DynamicResource").unwrap();
    assert!(dynamic.open);
    assert!(dynamic.properties.is_empty());
    assert!(dynamic.key.is_none());
}
