use roxmltree::Node;

use super::simple_type_def::SimpleTypeDefinition;
use super::xstypes::{NCName, QName};
use crate::error::Error;

/// Schema Component: Attribute Declaration (§3.2)
#[derive(Clone, Debug)]
pub struct AttributeDeclaration {
    pub name: NCName,
    pub type_definition: AttributeType,
}

#[derive(Clone, Debug)]
pub enum AttributeType {
    /// `type="..."` reference
    Named(QName),
    /// Anonymous `<simpleType>` child
    Inline(SimpleTypeDefinition),
    /// No type given; `xs:anySimpleType`
    Default,
}

impl AttributeDeclaration {
    pub const TAG_NAME: &'static str = "attribute";

    pub fn map_from_xml(attribute: Node) -> Result<Self, Error> {
        if let Some(ref_) = attribute.attribute("ref") {
            let target = QName::parse(ref_, attribute)?;
            return Ok(Self {
                name: target.local_name,
                type_definition: AttributeType::Default,
            });
        }

        let name = attribute
            .attribute("name")
            .ok_or_else(|| {
                Error::SchemaParse("attribute declaration without a name or ref attribute".into())
            })?
            .to_string();

        let type_definition = if let Some(type_) = attribute.attribute("type") {
            AttributeType::Named(QName::parse(type_, attribute)?)
        } else if let Some(inline) = attribute
            .children()
            .find(|c| c.tag_name().name() == SimpleTypeDefinition::TAG_NAME)
        {
            AttributeType::Inline(SimpleTypeDefinition::map_from_xml(inline)?)
        } else {
            AttributeType::Default
        };

        Ok(Self {
            name,
            type_definition,
        })
    }
}
