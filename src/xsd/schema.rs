use std::collections::HashMap;

use roxmltree::Node;

use super::attribute_group_def::AttributeGroupDefinition;
use super::complex_type_def::ComplexTypeDefinition;
use super::element_decl::ElementDeclaration;
use super::model_group_def::ModelGroupDefinition;
use super::simple_type_def::SimpleTypeDefinition;
use super::xstypes::{AnyURI, NCName};
use crate::error::Error;

/// Schema Component: Schema (§3.17) — the index of named top-level
/// components of one parsed document. Immutable after construction.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    pub target_namespace: Option<AnyURI>,
    simple_types: HashMap<NCName, SimpleTypeDefinition>,
    complex_types: HashMap<NCName, ComplexTypeDefinition>,
    elements: HashMap<NCName, ElementDeclaration>,
    attribute_groups: HashMap<NCName, AttributeGroupDefinition>,
    model_groups: HashMap<NCName, ModelGroupDefinition>,
}

impl Schema {
    pub fn map_from_xml(schema: Node) -> Result<Self, Error> {
        if schema.tag_name().name() != "schema" {
            return Err(Error::SchemaParse(format!(
                "expected a <schema> document root, found <{}>",
                schema.tag_name().name()
            )));
        }

        let mut result = Self {
            target_namespace: schema.attribute("targetNamespace").map(String::from),
            ..Self::default()
        };

        for child in schema.children().filter(|c| c.is_element()) {
            match child.tag_name().name() {
                SimpleTypeDefinition::TAG_NAME => {
                    let def = SimpleTypeDefinition::map_from_xml(child)?;
                    let name = def.name.clone().ok_or_else(|| {
                        Error::SchemaParse("top-level simpleType without a name".into())
                    })?;
                    result.simple_types.insert(name, def);
                }
                ComplexTypeDefinition::TAG_NAME => {
                    let def = ComplexTypeDefinition::map_from_xml(child)?;
                    let name = def.name.clone().ok_or_else(|| {
                        Error::SchemaParse("top-level complexType without a name".into())
                    })?;
                    result.complex_types.insert(name, def);
                }
                ElementDeclaration::TAG_NAME => {
                    if child.attribute("name").is_none() {
                        return Err(Error::SchemaParse(
                            "top-level element without a name".into(),
                        ));
                    }
                    let decl = ElementDeclaration::map_from_xml(child)?;
                    result.elements.insert(decl.name.clone(), decl);
                }
                AttributeGroupDefinition::TAG_NAME => {
                    let def = AttributeGroupDefinition::map_from_xml(child)?;
                    result.attribute_groups.insert(def.name.clone(), def);
                }
                ModelGroupDefinition::TAG_NAME => {
                    let def = ModelGroupDefinition::map_from_xml(child)?;
                    result.model_groups.insert(def.name.clone(), def);
                }
                // annotation, import, include, notation, top-level attribute
                _ => {}
            }
        }

        Ok(result)
    }

    pub fn element(&self, name: &str) -> Option<&ElementDeclaration> {
        self.elements.get(name)
    }

    pub fn complex_type(&self, name: &str) -> Option<&ComplexTypeDefinition> {
        self.complex_types.get(name)
    }

    pub fn simple_type(&self, name: &str) -> Option<&SimpleTypeDefinition> {
        self.simple_types.get(name)
    }

    pub fn attribute_group(&self, name: &str) -> Option<&AttributeGroupDefinition> {
        self.attribute_groups.get(name)
    }

    pub fn model_group(&self, name: &str) -> Option<&ModelGroupDefinition> {
        self.model_groups.get(name)
    }
}
