//! Type declarations: enumerations, complex types and entity types

use super::writer::XmlWriter;
use crate::catalog::{Catalog, EnumType, Member, StructuredType};
use crate::edm::constants::{DYNAMIC_RESOURCE_DECLARATION, bool_literal, qualified, terms};
use crate::edm::map_type;
use anyhow::Result;
use log::{debug, warn};
use std::io::Write;

/// Counts of what a render pass declared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaStats {
    pub enum_types: usize,
    pub complex_types: usize,
    pub entity_types: usize,
}

pub struct SchemaRenderer<'c> {
    catalog: &'c Catalog,
}

impl<'c> SchemaRenderer<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Writes every declaration in one forward pass: enums, complex types,
    /// entity types, then the synthetic dynamic resource type.
    pub fn render<W: Write>(&self, xml: &mut XmlWriter<W>) -> Result<SchemaStats> {
        let mut stats = SchemaStats::default();

        for enum_type in self.catalog.enum_types() {
            self.render_enum(xml, enum_type)?;
            stats.enum_types += 1;
        }

        for complex_type in self.catalog.complex_types() {
            self.render_structured(xml, "ComplexType", complex_type, None)?;
            stats.complex_types += 1;
        }

        for entity_type in self.catalog.entity_types() {
            let key = select_key(entity_type);
            self.render_structured(xml, "EntityType", entity_type, key)?;
            stats.entity_types += 1;
        }

        xml.add_self_closing_tag(
            "EntityType",
            &[
                ("Name", DYNAMIC_RESOURCE_DECLARATION),
                ("OpenType", bool_literal(true)),
            ],
        )?;

        Ok(stats)
    }

    fn render_enum<W: Write>(&self, xml: &mut XmlWriter<W>, enum_type: &EnumType) -> Result<()> {
        debug!("Declaring enum type {}", enum_type.name);
        let name = qualified(&enum_type.name);
        xml.add_opening_tag("EnumType", &[("Name", name.as_str())])?;
        for member in &enum_type.members {
            let value = member.value.to_string();
            xml.add_self_closing_tag(
                "Member",
                &[("Name", member.name.as_str()), ("Value", value.as_str())],
            )?;
        }
        xml.add_closing_tag("EnumType")
    }

    fn render_structured<W: Write>(
        &self,
        xml: &mut XmlWriter<W>,
        tag: &str,
        ty: &StructuredType,
        key: Option<&Member>,
    ) -> Result<()> {
        let open = ty.is_open();
        debug!("Declaring {} {} (open: {})", tag, ty.name, open);

        let name = map_type(&ty.descriptor());
        xml.add_opening_tag(tag, &[("Name", name.as_str()), ("OpenType", bool_literal(open))])?;

        if let Some(key) = key {
            xml.add_opening_tag("Key", &[])?;
            xml.add_self_closing_tag("PropertyRef", &[("Name", key.name.as_str())])?;
            xml.add_closing_tag("Key")?;
        }

        for member in visible_members(ty, key) {
            render_property(xml, member)?;
        }

        xml.add_closing_tag(tag)
    }
}

/// First declared member flagged as key. Later candidates are ignored.
pub fn select_key(ty: &StructuredType) -> Option<&Member> {
    let mut candidates = ty.key_candidates();
    let key = candidates.next()?;
    let ignored: Vec<&str> = candidates.map(|m| m.name.as_str()).collect();
    if !ignored.is_empty() {
        warn!(
            "Entity type {} has several key members; using '{}', ignoring {:?}",
            ty.name, key.name, ignored
        );
    }
    Some(key)
}

/// Declared members that get a `Property` element. Hidden members are left
/// out unless they are the key.
pub fn visible_members<'t>(
    ty: &'t StructuredType,
    key: Option<&'t Member>,
) -> impl Iterator<Item = &'t Member> {
    ty.declared_members()
        .filter(move |member| !member.hidden || key.is_some_and(|k| std::ptr::eq(k, *member)))
}

fn render_property<W: Write>(xml: &mut XmlWriter<W>, member: &Member) -> Result<()> {
    let Some(ty) = member.declared_type() else {
        return Ok(());
    };

    let type_name = map_type(ty);
    let attributes = [
        ("Name", member.name.as_str()),
        ("Type", type_name.as_str()),
        ("Nullable", bool_literal(member.nullable)),
    ];

    match permission(member) {
        Some(permission) => {
            xml.add_opening_tag("Property", &attributes)?;
            xml.add_opening_tag("Annotation", &[("Term", terms::PERMISSIONS)])?;
            xml.add_text_element("EnumMember", permission)?;
            xml.add_closing_tag("Annotation")?;
            xml.add_closing_tag("Property")
        }
        None => xml.add_self_closing_tag("Property", &attributes),
    }
}

/// Read-only wins when both flags are set
fn permission(member: &Member) -> Option<&'static str> {
    if member.read_only {
        Some(terms::PERMISSION_READ)
    } else if member.write_only {
        Some(terms::PERMISSION_WRITE)
    } else {
        None
    }
}
