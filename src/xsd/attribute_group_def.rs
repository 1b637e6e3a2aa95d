use roxmltree::Node;

use super::attribute_decl::AttributeDeclaration;
use super::attribute_use::AttributeUse;
use super::xstypes::{NCName, QName};
use crate::error::Error;

/// Schema Component: Attribute Group Definition (§3.6)
#[derive(Clone, Debug)]
pub struct AttributeGroupDefinition {
    pub name: NCName,
    pub attribute_uses: Vec<AttributeUse>,
    /// References to other attribute groups, expanded at resolution time
    pub group_refs: Vec<QName>,
}

impl AttributeGroupDefinition {
    pub const TAG_NAME: &'static str = "attributeGroup";

    pub fn map_from_xml(group: Node) -> Result<Self, Error> {
        let name = group
            .attribute("name")
            .ok_or_else(|| {
                Error::SchemaParse("attribute group definition without a name".into())
            })?
            .to_string();

        let mut attribute_uses = Vec::new();
        let mut group_refs = Vec::new();
        for child in group.children().filter(|c| c.is_element()) {
            match child.tag_name().name() {
                AttributeDeclaration::TAG_NAME => {
                    attribute_uses.push(AttributeUse::map_from_xml(child)?);
                }
                Self::TAG_NAME => {
                    if let Some(ref_) = child.attribute("ref") {
                        group_refs.push(QName::parse(ref_, child)?);
                    }
                }
                _ => {}
            }
        }

        Ok(Self {
            name,
            attribute_uses,
            group_refs,
        })
    }
}
