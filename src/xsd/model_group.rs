use roxmltree::Node;

use super::element_decl::ElementDeclaration;
use super::particle::Particle;
use super::xstypes::Sequence;
use crate::error::Error;

/// Schema Component: Model Group, a kind of Term (§3.8)
#[derive(Clone, Debug)]
pub struct ModelGroup {
    pub compositor: Compositor,
    pub particles: Sequence<Particle>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Compositor {
    All,
    Choice,
    Sequence,
}

impl ModelGroup {
    /// Maps an `<all>`, `<choice>` or `<sequence>` element and its particle
    /// children, in declaration order.
    pub fn map_from_xml(group: Node) -> Result<Self, Error> {
        let compositor = match group.tag_name().name() {
            "all" => Compositor::All,
            "choice" => Compositor::Choice,
            "sequence" => Compositor::Sequence,
            other => {
                return Err(Error::SchemaParse(format!(
                    "unexpected model group element <{other}>"
                )))
            }
        };

        let particles = group
            .children()
            .filter(|c| c.is_element())
            .filter_map(|child| match child.tag_name().name() {
                "all" | "choice" | "sequence" => Some(Particle::map_from_xml_group(child)),
                ElementDeclaration::TAG_NAME => Some(Particle::map_from_xml_element(child)),
                "group" => Some(Particle::map_from_xml_group_reference(child)),
                _ => None,
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ModelGroup {
            compositor,
            particles,
        })
    }
}
