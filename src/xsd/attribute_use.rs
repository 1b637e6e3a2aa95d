use roxmltree::Node;

use super::attribute_decl::AttributeDeclaration;
use crate::error::Error;

/// Schema Component: Attribute Use (§3.5)
#[derive(Clone, Debug)]
pub struct AttributeUse {
    pub required: bool,
    pub attribute_declaration: AttributeDeclaration,
}

impl AttributeUse {
    pub fn map_from_xml(attribute: Node) -> Result<Self, Error> {
        let required = attribute.attribute("use") == Some("required");
        Ok(Self {
            required,
            attribute_declaration: AttributeDeclaration::map_from_xml(attribute)?,
        })
    }
}
