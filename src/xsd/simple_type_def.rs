use roxmltree::Node;

use super::xstypes::{NCName, QName};
use crate::error::Error;

/// Schema Component: Simple Type Definition (§3.16), reduced to the
/// restriction base and enumeration facets the taxonomy subset uses.
#[derive(Clone, Debug)]
pub struct SimpleTypeDefinition {
    pub name: Option<NCName>,
    pub base: Option<QName>,
    pub enumeration: Vec<String>,
}

impl SimpleTypeDefinition {
    pub const TAG_NAME: &'static str = "simpleType";

    pub fn map_from_xml(node: Node) -> Result<Self, Error> {
        let name = node.attribute("name").map(String::from);

        let mut base = None;
        let mut enumeration = Vec::new();
        if let Some(restriction) = node
            .children()
            .find(|c| c.tag_name().name() == "restriction")
        {
            base = restriction
                .attribute("base")
                .map(|b| QName::parse(b, restriction))
                .transpose()?;
            for facet in restriction
                .children()
                .filter(|c| c.tag_name().name() == "enumeration")
            {
                if let Some(value) = facet.attribute("value") {
                    enumeration.push(value.to_string());
                }
            }
        }
        // Unions and lists fall outside the subset; they keep no base and
        // resolve to the generic string label.

        Ok(Self {
            name,
            base,
            enumeration,
        })
    }
}
