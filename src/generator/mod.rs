pub mod mindmap;
pub mod pseudo;

use crate::resolve::{Cardinality, Kind, ResolvedNode};

/// Shared line label for both emitters: `name`, an optional scalar type,
/// and trailing markers for cardinality (`*` repeats, `?` optional, with
/// `*` winning when both apply) and cycle truncation (`...`). Attribute
/// nodes are prefixed `@`.
pub(crate) fn node_label(node: &ResolvedNode) -> String {
    let mut label = String::new();
    if node.kind == Kind::Attribute {
        label.push('@');
    }
    label.push_str(&node.name);
    if let Some(leaf_type) = &node.leaf_type {
        label.push_str(": ");
        label.push_str(leaf_type);
    }
    match node.cardinality {
        Cardinality::Many => label.push_str(" *"),
        Cardinality::Optional => label.push_str(" ?"),
        Cardinality::One => {}
    }
    if node.truncated {
        label.push_str(" ...");
    }
    label
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::resolve::{Cardinality, Kind, ResolvedNode};
    use crate::xsd::MaxOccurs;

    pub fn node(name: &str, kind: Kind, cardinality: Cardinality) -> ResolvedNode {
        let (min_occurs, max_occurs) = match cardinality {
            Cardinality::One => (1, MaxOccurs::Count(1)),
            Cardinality::Optional => (0, MaxOccurs::Count(1)),
            Cardinality::Many => (1, MaxOccurs::Unbounded),
        };
        ResolvedNode {
            name: name.to_string(),
            kind,
            cardinality,
            min_occurs,
            max_occurs,
            leaf_type: None,
            truncated: false,
            children: Vec::new(),
        }
    }

    pub fn leaf(name: &str, label: &str, cardinality: Cardinality) -> ResolvedNode {
        let mut n = node(name, Kind::Leaf, cardinality);
        n.leaf_type = Some(label.to_string());
        n
    }
}
