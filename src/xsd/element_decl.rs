use roxmltree::Node;

use super::complex_type_def::ComplexTypeDefinition;
use super::simple_type_def::SimpleTypeDefinition;
use super::xstypes::{NCName, QName};
use crate::error::Error;

/// Schema Component: Element Declaration, a kind of Term (§3.3)
///
/// Occurrence bounds live on the enclosing [`Particle`](super::Particle), not
/// here, so global and local declarations share one shape.
#[derive(Clone, Debug)]
pub struct ElementDeclaration {
    pub name: NCName,
    pub content: ElementContent,
}

#[derive(Clone, Debug)]
pub enum ElementContent {
    /// `type="..."` reference to a named simple or complex type
    Named(QName),
    /// `ref="..."` reference to a global element declaration
    Ref(QName),
    /// Anonymous `<complexType>` child
    InlineComplex(Box<ComplexTypeDefinition>),
    /// Anonymous `<simpleType>` child
    InlineSimple(SimpleTypeDefinition),
    /// Neither a type attribute nor an inline definition; `xs:anyType`
    AnyType,
}

impl ElementDeclaration {
    pub const TAG_NAME: &'static str = "element";

    pub fn map_from_xml(element: Node) -> Result<Self, Error> {
        if let Some(ref_) = element.attribute("ref") {
            let target = QName::parse(ref_, element)?;
            return Ok(Self {
                name: target.local_name.clone(),
                content: ElementContent::Ref(target),
            });
        }

        let name = element
            .attribute("name")
            .ok_or_else(|| {
                Error::SchemaParse("element declaration without a name or ref attribute".into())
            })?
            .to_string();

        // {type definition} The first of the following that applies:
        //   1 the type resolved to by the type [attribute],
        //   2 the inline <complexType> or <simpleType> child,
        //   3 xs:anyType.
        let content = if let Some(type_) = element.attribute("type") {
            ElementContent::Named(QName::parse(type_, element)?)
        } else if let Some(inline) = element
            .children()
            .find(|c| c.tag_name().name() == ComplexTypeDefinition::TAG_NAME)
        {
            ElementContent::InlineComplex(Box::new(ComplexTypeDefinition::map_from_xml(inline)?))
        } else if let Some(inline) = element
            .children()
            .find(|c| c.tag_name().name() == SimpleTypeDefinition::TAG_NAME)
        {
            ElementContent::InlineSimple(SimpleTypeDefinition::map_from_xml(inline)?)
        } else {
            ElementContent::AnyType
        };

        Ok(Self { name, content })
    }
}
