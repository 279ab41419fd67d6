//! Native type descriptor -> canonical EDM type name
//!
//! Mapping is an ordered chain of rules; the first rule that matches wins.
//! The order is part of the contract:
//!
//! 1. enumeration
//! 2. nullable wrapper (unwrap and map the inner type)
//! 3. binary blob
//! 4. guid
//! 5. string-keyed dictionary (before 8: dictionaries are enumerable)
//! 6. any-primitive wrapper
//! 7. any-value wrapper
//! 8. sequence
//! 9. object reference
//! 10. remaining primitives
//!
//! No descriptor is rejected.

use crate::catalog::{Primitive, TypeDescriptor};
use crate::edm::constants::{qualified, types};

/// One step of the mapping chain
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&TypeDescriptor) -> Option<String>,
}

pub const RULES: &[Rule] = &[
    Rule { name: "enumeration", apply: enumeration },
    Rule { name: "nullable", apply: nullable },
    Rule { name: "binary", apply: binary },
    Rule { name: "guid", apply: guid },
    Rule { name: "dynamic-dictionary", apply: dynamic_dictionary },
    Rule { name: "any-primitive", apply: any_primitive },
    Rule { name: "any-value", apply: any_value },
    Rule { name: "sequence", apply: sequence },
    Rule { name: "object", apply: object },
    Rule { name: "primitive", apply: primitive },
];

/// Maps a descriptor to its EDM type name
pub fn map_type(descriptor: &TypeDescriptor) -> String {
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(descriptor))
        .unwrap_or_else(|| qualified(&descriptor.to_string()))
}

/// Name of the rule that decides the mapping for `descriptor`
pub fn matching_rule(descriptor: &TypeDescriptor) -> Option<&'static str> {
    RULES
        .iter()
        .find(|rule| (rule.apply)(descriptor).is_some())
        .map(|rule| rule.name)
}

fn enumeration(descriptor: &TypeDescriptor) -> Option<String> {
    match descriptor {
        TypeDescriptor::Enum(name) => Some(qualified(name)),
        _ => None,
    }
}

fn nullable(descriptor: &TypeDescriptor) -> Option<String> {
    match descriptor {
        TypeDescriptor::Nullable(inner) => Some(map_type(inner)),
        _ => None,
    }
}

fn binary(descriptor: &TypeDescriptor) -> Option<String> {
    match descriptor {
        TypeDescriptor::Primitive(Primitive::Binary) => Some(types::BINARY.to_string()),
        _ => None,
    }
}

fn guid(descriptor: &TypeDescriptor) -> Option<String> {
    match descriptor {
        TypeDescriptor::Primitive(Primitive::Guid) => Some(types::GUID.to_string()),
        _ => None,
    }
}

fn dynamic_dictionary(descriptor: &TypeDescriptor) -> Option<String> {
    descriptor
        .is_string_keyed_dictionary()
        .then(|| types::DYNAMIC_RESOURCE.to_string())
}

fn any_primitive(descriptor: &TypeDescriptor) -> Option<String> {
    matches!(descriptor, TypeDescriptor::AnyPrimitive).then(|| types::PRIMITIVE_TYPE.to_string())
}

fn any_value(descriptor: &TypeDescriptor) -> Option<String> {
    matches!(descriptor, TypeDescriptor::AnyValue).then(|| types::COMPLEX_TYPE.to_string())
}

fn sequence(descriptor: &TypeDescriptor) -> Option<String> {
    descriptor
        .element_type()
        .map(|element| format!("Collection({})", map_type(&element)))
}

fn object(descriptor: &TypeDescriptor) -> Option<String> {
    match descriptor {
        TypeDescriptor::Object(name) => Some(qualified(name)),
        _ => None,
    }
}

fn primitive(descriptor: &TypeDescriptor) -> Option<String> {
    let TypeDescriptor::Primitive(primitive) = descriptor else {
        return None;
    };

    let name = match primitive {
        Primitive::Boolean => types::BOOLEAN,
        Primitive::Byte => types::BYTE,
        Primitive::SByte => types::SBYTE,
        Primitive::DateTime => types::DATE_TIME_OFFSET,
        Primitive::Decimal => types::DECIMAL,
        Primitive::Double => types::DOUBLE,
        Primitive::Single => types::SINGLE,
        Primitive::Int16 => types::INT16,
        Primitive::Int32 | Primitive::UInt16 => types::INT32,
        Primitive::Int64 | Primitive::UInt32 | Primitive::UInt64 => types::INT64,
        Primitive::Char | Primitive::String => types::STRING,
        // taken by the binary and guid rules
        Primitive::Guid | Primitive::Binary => return None,
    };
    Some(name.to_string())
}
