//! Reading rendered metadata documents back
//!
//! Used by the `inspect` command and by tests to check what a client would
//! actually see.

use super::capabilities::Capabilities;
use crate::edm::constants::terms;
use anyhow::Result;
use log::debug;
use roxmltree::{Document, Node};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyInfo {
    pub name: String,
    pub property_type: String,
    pub nullable: bool,
    pub permission: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    pub name: String,
    pub open: bool,
    pub key: Option<String>,
    pub properties: Vec<PropertyInfo>,
}

impl TypeInfo {
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySetInfo {
    pub name: String,
    pub entity_type: String,
    pub capabilities: Capabilities,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub enum_types: Vec<String>,
    pub complex_types: Vec<TypeInfo>,
    pub entity_types: Vec<TypeInfo>,
    pub entity_sets: Vec<EntitySetInfo>,
}

impl DocumentSummary {
    pub fn entity_type(&self, name: &str) -> Option<&TypeInfo> {
        self.entity_types.iter().find(|t| t.name == name)
    }

    pub fn entity_set(&self, name: &str) -> Option<&EntitySetInfo> {
        self.entity_sets.iter().find(|s| s.name == name)
    }
}

/// Parse a CSDL metadata document into a summary
pub fn parse_document(metadata_xml: &str) -> Result<DocumentSummary> {
    let doc = Document::parse(metadata_xml)
        .map_err(|e| anyhow::anyhow!("Failed to parse metadata XML: {}", e))?;

    let mut summary = DocumentSummary::default();

    for node in doc.descendants().filter(|n| n.is_element()) {
        match node.tag_name().name() {
            "EnumType" => {
                if let Some(name) = node.attribute("Name") {
                    summary.enum_types.push(name.to_string());
                }
            }
            "ComplexType" => summary.complex_types.push(parse_type(node)),
            "EntityType" => summary.entity_types.push(parse_type(node)),
            "EntitySet" => summary.entity_sets.push(parse_entity_set(node)),
            _ => {}
        }
    }

    debug!(
        "Parsed metadata: {} entity types, {} entity sets",
        summary.entity_types.len(),
        summary.entity_sets.len()
    );
    Ok(summary)
}

/// Find one entity type by name, ignoring case
pub fn parse_entity_type(metadata_xml: &str, entity_name: &str) -> Result<TypeInfo> {
    let summary = parse_document(metadata_xml)?;
    summary
        .entity_types
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(entity_name))
        .ok_or_else(|| anyhow::anyhow!("Entity type '{}' not found in metadata", entity_name))
}

fn parse_type(node: Node) -> TypeInfo {
    let key = node
        .children()
        .find(|n| n.has_tag_name("Key"))
        .and_then(|k| k.children().find(|n| n.has_tag_name("PropertyRef")))
        .and_then(|r| r.attribute("Name"))
        .map(str::to_string);

    let properties = node
        .children()
        .filter(|n| n.has_tag_name("Property"))
        .filter_map(|property| {
            let name = property.attribute("Name")?;
            let permission = property
                .children()
                .find(|a| {
                    a.has_tag_name("Annotation") && a.attribute("Term") == Some(terms::PERMISSIONS)
                })
                .and_then(|a| a.children().find(|m| m.has_tag_name("EnumMember")))
                .and_then(|m| m.text())
                .map(str::to_string);

            Some(PropertyInfo {
                name: name.to_string(),
                property_type: property.attribute("Type").unwrap_or("unknown").to_string(),
                // CSDL default when the attribute is missing
                nullable: property.attribute("Nullable").map_or(true, |v| v == "true"),
                permission,
            })
        })
        .collect();

    TypeInfo {
        name: node.attribute("Name").unwrap_or_default().to_string(),
        open: node.attribute("OpenType") == Some("true"),
        key,
        properties,
    }
}

fn parse_entity_set(node: Node) -> EntitySetInfo {
    let restriction = |term: &str, property: &str| {
        node.children()
            .filter(|a| a.has_tag_name("Annotation") && a.attribute("Term") == Some(term))
            .flat_map(|a| a.descendants())
            .find(|v| v.has_tag_name("PropertyValue") && v.attribute("Property") == Some(property))
            .and_then(|v| v.attribute("Bool"))
            == Some("true")
    };

    EntitySetInfo {
        name: node.attribute("Name").unwrap_or_default().to_string(),
        entity_type: node.attribute("EntityType").unwrap_or_default().to_string(),
        capabilities: Capabilities {
            insertable: restriction(terms::INSERT_RESTRICTIONS, "Insertable"),
            updatable: restriction(terms::UPDATE_RESTRICTIONS, "Updatable"),
            deletable: restriction(terms::DELETE_RESTRICTIONS, "Deletable"),
        },
    }
}
