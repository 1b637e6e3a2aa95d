use std::fmt::Write;

use super::node_label;
use crate::resolve::ResolvedNode;

/// Renders the resolved tree as indented plain text, one line per node,
/// two spaces of indentation per level.
pub fn generate(root: &ResolvedNode) -> String {
    let mut out = String::new();
    emit(root, 0, &mut out);
    out
}

fn emit(node: &ResolvedNode, depth: usize, out: &mut String) {
    let _ = writeln!(out, "{:indent$}{}", "", node_label(node), indent = depth * 2);
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
    fn nesting_and_markers_match_the_tree() {
        let mut root = node("attack_pattern", Kind::Element, Cardinality::One);
        let mut mitigations = node("mitigations", Kind::Element, Cardinality::Optional);
        let mut mitigation = leaf("mitigation", "string", Cardinality::Many);
        mitigation.min_occurs = 0;
        mitigations.children.push(mitigation);
        root.children.push(mitigations);

        assert_eq!(
            generate(&root),
            "attack_pattern\n  mitigations ?\n    mitigation: string *\n"
        );
    }

    #[test]
    fn attributes_and_truncation_are_marked() {
        let mut root = node("weakness", Kind::Element, Cardinality::One);
        let mut id = leaf("id", "int", Cardinality::One);
        id.kind = Kind::Attribute;
        root.children.push(id);
        let mut cycle = node("related_weakness", Kind::Element, Cardinality::Many);
        cycle.truncated = true;
        root.children.push(cycle);

        assert_eq!(
            generate(&root),
            "weakness\n  @id: int\n  related_weakness * ...\n"
        );
    }
}
