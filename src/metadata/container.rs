//! Entity container and the document-level capability annotations

use super::capabilities::annotate;
use super::writer::XmlWriter;
use crate::catalog::{Catalog, EntityResource};
use crate::edm::constants::{CONTAINER_NAME, SUPPORTED_FORMAT, bool_literal, qualified, terms};
use crate::edm::map_type;
use anyhow::Result;
use log::debug;
use std::io::Write;

pub struct ContainerRenderer<'c> {
    catalog: &'c Catalog,
}

impl<'c> ContainerRenderer<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Writes the `EntityContainer` followed by the `Annotations` trailer.
    /// Returns the number of entity sets written.
    pub fn render<W: Write>(&self, xml: &mut XmlWriter<W>) -> Result<usize> {
        let mut entity_sets = 0;

        xml.add_opening_tag("EntityContainer", &[("Name", CONTAINER_NAME)])?;
        for resource in self.catalog.advertised_resources() {
            self.render_entity_set(xml, resource)?;
            entity_sets += 1;
        }
        xml.add_closing_tag("EntityContainer")?;

        self.render_trailer(xml)?;
        Ok(entity_sets)
    }

    fn render_entity_set<W: Write>(
        &self,
        xml: &mut XmlWriter<W>,
        resource: &EntityResource,
    ) -> Result<()> {
        let entity_type = map_type(&resource.entity_type);
        let capabilities = annotate(resource, self.catalog.scope().allowed(&resource.name));
        debug!(
            "Entity set {} -> {} {:?}",
            resource.name, entity_type, capabilities
        );

        xml.add_opening_tag(
            "EntitySet",
            &[
                ("Name", resource.name.as_str()),
                ("EntityType", entity_type.as_str()),
            ],
        )?;
        for (term, property, value) in capabilities.restrictions() {
            xml.add_opening_tag("Annotation", &[("Term", term)])?;
            xml.add_opening_tag("Record", &[])?;
            xml.add_self_closing_tag(
                "PropertyValue",
                &[("Property", property), ("Bool", bool_literal(value))],
            )?;
            xml.add_closing_tag("Record")?;
            xml.add_closing_tag("Annotation")?;
        }
        xml.add_closing_tag("EntitySet")
    }

    fn render_trailer<W: Write>(&self, xml: &mut XmlWriter<W>) -> Result<()> {
        let target = qualified(CONTAINER_NAME);
        xml.add_opening_tag("Annotations", &[("Target", target.as_str())])?;

        xml.add_opening_tag("Annotation", &[("Term", terms::CONFORMANCE_LEVEL)])?;
        xml.add_text_element("EnumMember", terms::CONFORMANCE_LEVEL_MINIMAL)?;
        xml.add_closing_tag("Annotation")?;

        xml.add_opening_tag("Annotation", &[("Term", terms::SUPPORTED_FORMATS)])?;
        xml.add_opening_tag("Collection", &[])?;
        xml.add_text_element("String", SUPPORTED_FORMAT)?;
        xml.add_closing_tag("Collection")?;
        xml.add_closing_tag("Annotation")?;

        xml.add_self_closing_tag(
            "Annotation",
            &[
                ("Term", terms::ASYNCHRONOUS_REQUESTS_SUPPORTED),
                ("Bool", bool_literal(true)),
            ],
        )?;

        // no filter functions are advertised
        xml.add_opening_tag("Annotation", &[("Term", terms::FILTER_FUNCTIONS)])?;
        xml.add_self_closing_tag("Collection", &[])?;
        xml.add_closing_tag("Annotation")?;

        xml.add_closing_tag("Annotations")
    }
}
