use std::fmt::Write;

use super::node_label;
use crate::resolve::ResolvedNode;

/// Renders the resolved tree as a PlantUML mind map. Depth is encoded in
/// the number of leading `*` markers, one more than the node's depth.
pub fn generate(root: &ResolvedNode, title: Option<&str>) -> String {
    let mut out = String::from("@startmindmap\n");
    if let Some(title) = title {
        let _ = writeln!(out, "title {title}");
    }
    emit(root, 0, &mut out);
    out.push_str("@endmindmap\n");
    out
}

fn emit(node: &ResolvedNode, depth: usize, out: &mut String) {
    let _ = writeln!(out, "{} {}", "*".repeat(depth + 1), node_label(node));
    for child in &node.children {
        emit(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{leaf, node};
    use super::*;
    use crate::resolve::{Cardinality, Kind};
    use pretty_assertions::assert_eq;

    #[test]
    fn star_depth_follows_nesting() {
        let mut root = node("attack_pattern", Kind::Element, Cardinality::One);
        let mut mitigations = node("mitigations", Kind::Element, Cardinality::Optional);
        mitigations
            .children
            .push(leaf("mitigation", "string", Cardinality::Many));
        root.children.push(mitigations);

        assert_eq!(
            generate(&root, Some("attack_pattern mindmap")),
            "@startmindmap\n\
             title attack_pattern mindmap\n\
             * attack_pattern\n\
             ** mitigations ?\n\
             *** mitigation: string *\n\
             @endmindmap\n"
        );
    }

    #[test]
    fn title_is_optional() {
        let root = node("weakness", Kind::Element, Cardinality::One);
        assert_eq!(
            generate(&root, None),
            "@startmindmap\n* weakness\n@endmindmap\n"
        );
    }
}
