use roxmltree::Node;

use super::element_decl::ElementDeclaration;
use super::model_group::ModelGroup;
use super::xstypes::QName;
use crate::error::Error;

/// Schema Component: Particle (§3.9), restricted to the occurrence bounds and
/// term kinds the taxonomy subset needs.
#[derive(Clone, Debug)]
pub struct Particle {
    pub min_occurs: u64,
    pub max_occurs: MaxOccurs,
    pub term: Term,
}

#[derive(Clone, Debug)]
pub enum Term {
    Element(ElementDeclaration),
    /// Anonymous nested `<all>`/`<choice>`/`<sequence>`
    Group(ModelGroup),
    /// `<group ref="..."/>`
    GroupRef(QName),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaxOccurs {
    Unbounded,
    Count(u64),
}

impl MaxOccurs {
    pub fn mul(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Unbounded, _) | (_, Self::Unbounded) => Self::Unbounded,
            (Self::Count(a), Self::Count(b)) => Self::Count(a * b),
        }
    }

    /// True when more than one occurrence is admitted.
    pub fn is_multiple(&self) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Count(n) => *n > 1,
        }
    }
}

impl Particle {
    pub(super) fn map_from_xml_element(element: Node) -> Result<Self, Error> {
        let (min_occurs, max_occurs) = occurs_from_xml(element)?;
        Ok(Particle {
            min_occurs,
            max_occurs,
            term: Term::Element(ElementDeclaration::map_from_xml(element)?),
        })
    }

    pub(super) fn map_from_xml_group(group: Node) -> Result<Self, Error> {
        let (min_occurs, max_occurs) = occurs_from_xml(group)?;
        Ok(Particle {
            min_occurs,
            max_occurs,
            term: Term::Group(ModelGroup::map_from_xml(group)?),
        })
    }

    pub(super) fn map_from_xml_group_reference(group: Node) -> Result<Self, Error> {
        let (min_occurs, max_occurs) = occurs_from_xml(group)?;
        let ref_ = group.attribute("ref").ok_or_else(|| {
            Error::SchemaParse("group reference without a ref attribute".into())
        })?;
        Ok(Particle {
            min_occurs,
            max_occurs,
            term: Term::GroupRef(QName::parse(ref_, group)?),
        })
    }
}

/// The `minOccurs`/`maxOccurs` attribute pair, both defaulting to 1.
pub(super) fn occurs_from_xml(node: Node) -> Result<(u64, MaxOccurs), Error> {
    let min_occurs = match node.attribute("minOccurs") {
        None => 1,
        Some(v) => v.parse().map_err(|_| {
            Error::SchemaParse(format!("invalid minOccurs value {v:?}"))
        })?,
    };
    let max_occurs = match node.attribute("maxOccurs") {
        None => MaxOccurs::Count(1),
        Some("unbounded") => MaxOccurs::Unbounded,
        Some(v) => MaxOccurs::Count(v.parse().map_err(|_| {
            Error::SchemaParse(format!("invalid maxOccurs value {v:?}"))
        })?),
    };
    Ok((min_occurs, max_occurs))
}
