use roxmltree::Node;

use super::attribute_decl::AttributeDeclaration;
use super::attribute_group_def::AttributeGroupDefinition;
use super::attribute_use::AttributeUse;
use super::model_group::{Compositor, ModelGroup};
use super::particle::Particle;
use super::xstypes::{NCName, QName};
use crate::error::Error;

/// Schema Component: Complex Type Definition (§3.4)
#[derive(Clone, Debug)]
pub struct ComplexTypeDefinition {
    pub name: Option<NCName>,
    pub content: Content,
    pub attribute_uses: Vec<AttributeUse>,
    pub attribute_group_refs: Vec<QName>,
}

#[derive(Clone, Debug)]
pub enum Content {
    /// A model group of child elements
    ElementOnly(ModelGroup),
    /// `<complexContent>`/`<simpleContent>` derivation from a base type.
    /// A derivation from a complex base may add its own model group.
    Derived {
        base: QName,
        group: Option<ModelGroup>,
    },
    Empty,
}

impl ComplexTypeDefinition {
    pub const TAG_NAME: &'static str = "complexType";

    pub fn map_from_xml(node: Node) -> Result<Self, Error> {
        let name = node.attribute("name").map(String::from);

        let mut attribute_uses = Vec::new();
        let mut attribute_group_refs = Vec::new();
        let mut content = Content::Empty;

        if let Some(complex_content) = named_child(node, "complexContent") {
            if let Some(derivation) = derivation_child(complex_content) {
                let base = derivation_base(derivation)?;
                let group = model_group_child(derivation)?;
                collect_attributes(derivation, &mut attribute_uses, &mut attribute_group_refs)?;
                content = Content::Derived { base, group };
            }
        } else if let Some(simple_content) = named_child(node, "simpleContent") {
            if let Some(derivation) = derivation_child(simple_content) {
                let base = derivation_base(derivation)?;
                collect_attributes(derivation, &mut attribute_uses, &mut attribute_group_refs)?;
                content = Content::Derived { base, group: None };
            }
        } else {
            if let Some(group) = model_group_child(node)? {
                content = Content::ElementOnly(group);
            }
            collect_attributes(node, &mut attribute_uses, &mut attribute_group_refs)?;
        }

        Ok(Self {
            name,
            content,
            attribute_uses,
            attribute_group_refs,
        })
    }
}

fn named_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| c.tag_name().name() == name)
}

fn derivation_child<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    named_child(node, "extension").or_else(|| named_child(node, "restriction"))
}

fn derivation_base(derivation: Node) -> Result<QName, Error> {
    let base = derivation.attribute("base").ok_or_else(|| {
        Error::SchemaParse(format!(
            "<{}> without a base attribute",
            derivation.tag_name().name()
        ))
    })?;
    QName::parse(base, derivation)
}

/// The content model group, if any: a direct `<all>`/`<choice>`/`<sequence>`
/// child, or a `<group ref>` wrapped in a singleton sequence.
fn model_group_child(node: Node) -> Result<Option<ModelGroup>, Error> {
    for child in node.children().filter(|c| c.is_element()) {
        match child.tag_name().name() {
            "all" | "choice" | "sequence" => {
                return ModelGroup::map_from_xml(child).map(Some);
            }
            "group" => {
                return Ok(Some(ModelGroup {
                    compositor: Compositor::Sequence,
                    particles: vec![Particle::map_from_xml_group_reference(child)?],
                }));
            }
            _ => {}
        }
    }
    Ok(None)
}

fn collect_attributes(
    node: Node,
    attribute_uses: &mut Vec<AttributeUse>,
    attribute_group_refs: &mut Vec<QName>,
) -> Result<(), Error> {
    for child in node.children().filter(|c| c.is_element()) {
        match child.tag_name().name() {
            AttributeDeclaration::TAG_NAME => {
                attribute_uses.push(AttributeUse::map_from_xml(child)?);
            }
            AttributeGroupDefinition::TAG_NAME => {
                if let Some(ref_) = child.attribute("ref") {
                    attribute_group_refs.push(QName::parse(ref_, child)?);
                }
            }
            _ => {}
        }
    }
    Ok(())
}
