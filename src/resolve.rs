//! Expansion of a schema's type graph into a bounded tree.
//!
//! Resolution walks type references depth-first, carrying the set of named
//! types on the current root-to-node path. A reference back into that set
//! ends the branch with a `truncated` marker instead of recursing, which
//! bounds the tree for any finite schema. Sibling branches do not share the
//! set, so a type may appear expanded more than once in the same tree as
//! long as it is not its own ancestor.

use crate::error::Error;
use crate::ignore::IgnoreSet;
use crate::naming;
use crate::xsd::{
    builtins, AttributeDeclaration, AttributeType, AttributeUse, ComplexTypeDefinition, Content,
    ElementContent, MaxOccurs, ModelGroup, NCName, QName, Schema, SimpleTypeDefinition, Term,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Element,
    Attribute,
    Group,
    Leaf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Optional,
    Many,
}

/// One node of the resolved tree. The coarse `cardinality` tag is derived
/// from `min_occurs`/`max_occurs`, which are kept raw so callers can still
/// see that a `Many` node is also optional.
#[derive(Clone, Debug)]
pub struct ResolvedNode {
    pub name: String,
    pub kind: Kind,
    pub cardinality: Cardinality,
    pub min_occurs: u64,
    pub max_occurs: MaxOccurs,
    /// Scalar label for leaf nodes (`string`, `int`, `enum("a", "b")`, ...)
    pub leaf_type: Option<String>,
    /// Expansion was cut because the node's type re-entered an ancestor,
    /// not because it reached a genuine leaf
    pub truncated: bool,
    pub children: Vec<ResolvedNode>,
}

impl ResolvedNode {
    pub fn is_optional(&self) -> bool {
        self.min_occurs == 0
    }
}

pub fn cardinality(min_occurs: u64, max_occurs: &MaxOccurs) -> Cardinality {
    if max_occurs.is_multiple() {
        Cardinality::Many
    } else if min_occurs == 0 {
        Cardinality::Optional
    } else {
        Cardinality::One
    }
}

/// Expands the tree rooted at `root`. The identifier is tried literally as
/// a global element or complex type, then through the conventional alias
/// spellings taxonomy schemas use (`attack_pattern` names
/// `AttackPatternType`, `attack_pattern_catalog` names
/// `Attack_Pattern_Catalog`).
pub fn resolve(root: &str, schema: &Schema, ignored: &IgnoreSet) -> Result<ResolvedNode, Error> {
    let mut resolver = Resolver {
        schema,
        ignored,
        ancestry: Vec::new(),
        lineage: Vec::new(),
    };
    let display_name = naming::snake_case(root);

    for candidate in root_candidates(root) {
        if let Some(decl) = schema.element(&candidate) {
            return resolver.resolve_node(
                display_name,
                &decl.content,
                Kind::Element,
                1,
                MaxOccurs::Count(1),
            );
        }
        if schema.complex_type(&candidate).is_some() {
            let content = ElementContent::Named(QName::with_optional_namespace(
                schema.target_namespace.clone(),
                candidate,
            ));
            return resolver.resolve_node(
                display_name,
                &content,
                Kind::Element,
                1,
                MaxOccurs::Count(1),
            );
        }
    }

    Err(Error::UnknownRoot(root.to_string()))
}

fn root_candidates(root: &str) -> Vec<String> {
    let mut candidates = vec![root.to_string()];
    for candidate in [
        naming::pascal_underscore(root),
        naming::pascal_case(root),
        format!("{}Type", naming::pascal_case(root)),
    ] {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

struct Resolver<'a> {
    schema: &'a Schema,
    ignored: &'a IgnoreSet,
    /// Named types and groups on the current expansion path only
    ancestry: Vec<NCName>,
    /// snake_case node names from the root down to the current node
    lineage: Vec<String>,
}

impl<'a> Resolver<'a> {
    fn lineage_path(&self) -> String {
        self.lineage.join(".")
    }

    fn dangling(&self, name: &QName) -> Error {
        Error::DanglingReference {
            type_name: name.local_name.clone(),
            lineage: self.lineage_path(),
        }
    }

    fn resolve_node(
        &mut self,
        name: String,
        content: &ElementContent,
        kind: Kind,
        min_occurs: u64,
        max_occurs: MaxOccurs,
    ) -> Result<ResolvedNode, Error> {
        self.lineage.push(name.clone());
        let mut node = ResolvedNode {
            name,
            kind,
            cardinality: cardinality(min_occurs, &max_occurs),
            min_occurs,
            max_occurs,
            leaf_type: None,
            truncated: false,
            children: Vec::new(),
        };
        let result = if self.ignored.contains(&self.lineage_path()) {
            Ok(())
        } else {
            self.expand_into(&mut node, content)
        };
        self.lineage.pop();
        result.map(|()| node)
    }

    fn expand_into(&mut self, node: &mut ResolvedNode, content: &ElementContent) -> Result<(), Error> {
        let schema = self.schema;
        match content {
            ElementContent::AnyType => {
                node.kind = Kind::Leaf;
                node.leaf_type = Some("string".into());
            }
            ElementContent::InlineSimple(def) => {
                node.kind = Kind::Leaf;
                node.leaf_type = Some(self.simple_scalar_label(def)?);
            }
            ElementContent::InlineComplex(def) => {
                // Anonymous types have no name to recur through, so no
                // ancestry entry is needed.
                self.expand_complex(node, def)?;
            }
            ElementContent::Ref(target) => {
                let decl = schema
                    .element(&target.local_name)
                    .ok_or_else(|| self.dangling(target))?;
                self.expand_into(node, &decl.content)?;
            }
            ElementContent::Named(name) => {
                if builtins::is_builtin(name) {
                    node.kind = Kind::Leaf;
                    node.leaf_type = Some(builtins::scalar_label(name).to_string());
                } else if let Some(def) = schema.simple_type(&name.local_name) {
                    node.kind = Kind::Leaf;
                    node.leaf_type = Some(self.simple_scalar_label(def)?);
                } else if let Some(def) = schema.complex_type(&name.local_name) {
                    if self.ancestry.iter().any(|a| a == &name.local_name) {
                        node.truncated = true;
                    } else {
                        self.ancestry.push(name.local_name.clone());
                        let result = self.expand_complex(node, def);
                        self.ancestry.pop();
                        result?;
                    }
                } else {
                    return Err(self.dangling(name));
                }
            }
        }
        Ok(())
    }

    fn expand_complex(
        &mut self,
        node: &mut ResolvedNode,
        def: &ComplexTypeDefinition,
    ) -> Result<(), Error> {
        match &def.content {
            Content::Empty => {}
            Content::ElementOnly(group) => {
                self.append_group_children(node, group, 1, &MaxOccurs::Count(1))?;
            }
            Content::Derived { base, group } => {
                self.expand_derivation_base(node, base)?;
                if let Some(group) = group {
                    self.append_group_children(node, group, 1, &MaxOccurs::Count(1))?;
                }
            }
        }
        self.append_attribute_uses(node, &def.attribute_uses)?;
        let mut seen = Vec::new();
        for group_ref in &def.attribute_group_refs {
            self.append_attribute_group(node, group_ref, &mut seen)?;
        }
        Ok(())
    }

    /// Splices the base type's children ahead of the derived type's own.
    /// A scalar base becomes a `value` leaf carrying the element text.
    fn expand_derivation_base(&mut self, node: &mut ResolvedNode, base: &QName) -> Result<(), Error> {
        let schema = self.schema;
        if builtins::is_builtin(base) {
            node.children
                .push(value_leaf(builtins::scalar_label(base).to_string()));
            return Ok(());
        }
        if let Some(def) = schema.simple_type(&base.local_name) {
            let label = self.simple_scalar_label(def)?;
            node.children.push(value_leaf(label));
            return Ok(());
        }
        if let Some(def) = schema.complex_type(&base.local_name) {
            if self.ancestry.iter().any(|a| a == &base.local_name) {
                node.truncated = true;
                return Ok(());
            }
            self.ancestry.push(base.local_name.clone());
            let result = self.expand_complex(node, def);
            self.ancestry.pop();
            return result;
        }
        Err(self.dangling(base))
    }

    fn append_group_children(
        &mut self,
        node: &mut ResolvedNode,
        group: &ModelGroup,
        outer_min: u64,
        outer_max: &MaxOccurs,
    ) -> Result<(), Error> {
        // SEQUENCE and ALL keep declaration order; CHOICE flattens all
        // alternatives as siblings. Nested anonymous groups dissolve into
        // the parent with their occurrence bounds multiplied through.
        for particle in &group.particles {
            let min_occurs = outer_min * particle.min_occurs;
            let max_occurs = outer_max.mul(&particle.max_occurs);
            match &particle.term {
                Term::Element(decl) => {
                    let child = self.resolve_node(
                        naming::snake_case(&decl.name),
                        &decl.content,
                        Kind::Element,
                        min_occurs,
                        max_occurs,
                    )?;
                    node.children.push(child);
                }
                Term::Group(inner) => {
                    self.append_group_children(node, inner, min_occurs, &max_occurs)?;
                }
                Term::GroupRef(name) => {
                    let child = self.resolve_group_ref(name, min_occurs, max_occurs)?;
                    node.children.push(child);
                }
            }
        }
        Ok(())
    }

    fn resolve_group_ref(
        &mut self,
        name: &QName,
        min_occurs: u64,
        max_occurs: MaxOccurs,
    ) -> Result<ResolvedNode, Error> {
        let schema = self.schema;
        let def = schema
            .model_group(&name.local_name)
            .ok_or_else(|| self.dangling(name))?;

        let node_name = naming::snake_case(&def.name);
        self.lineage.push(node_name.clone());
        let mut node = ResolvedNode {
            name: node_name,
            kind: Kind::Group,
            cardinality: cardinality(min_occurs, &max_occurs),
            min_occurs,
            max_occurs,
            leaf_type: None,
            truncated: false,
            children: Vec::new(),
        };
        let result = if self.ignored.contains(&self.lineage_path()) {
            Ok(())
        } else if self.ancestry.iter().any(|a| a == &def.name) {
            node.truncated = true;
            Ok(())
        } else {
            self.ancestry.push(def.name.clone());
            let result = self.append_group_children(&mut node, &def.model_group, 1, &MaxOccurs::Count(1));
            self.ancestry.pop();
            result
        };
        self.lineage.pop();
        result.map(|()| node)
    }

    fn append_attribute_uses(
        &mut self,
        node: &mut ResolvedNode,
        uses: &[AttributeUse],
    ) -> Result<(), Error> {
        for attribute_use in uses {
            let decl = &attribute_use.attribute_declaration;
            let name = naming::snake_case(&decl.name);
            self.lineage.push(name.clone());
            let label = self.attribute_scalar_label(decl);
            self.lineage.pop();
            let required = attribute_use.required;
            node.children.push(ResolvedNode {
                name,
                kind: Kind::Attribute,
                cardinality: if required {
                    Cardinality::One
                } else {
                    Cardinality::Optional
                },
                min_occurs: u64::from(required),
                max_occurs: MaxOccurs::Count(1),
                leaf_type: Some(label?),
                truncated: false,
                children: Vec::new(),
            });
        }
        Ok(())
    }

    fn append_attribute_group(
        &mut self,
        node: &mut ResolvedNode,
        name: &QName,
        seen: &mut Vec<NCName>,
    ) -> Result<(), Error> {
        let schema = self.schema;
        let def = schema
            .attribute_group(&name.local_name)
            .ok_or_else(|| self.dangling(name))?;
        if seen.iter().any(|s| s == &def.name) {
            return Ok(());
        }
        seen.push(def.name.clone());
        self.append_attribute_uses(node, &def.attribute_uses)?;
        for nested in &def.group_refs {
            self.append_attribute_group(node, nested, seen)?;
        }
        Ok(())
    }

    /// Attributes cannot carry complex types in the supported subset; a
    /// schema that does so is rejected rather than mis-resolved.
    fn attribute_scalar_label(&self, decl: &AttributeDeclaration) -> Result<String, Error> {
        let schema = self.schema;
        match &decl.type_definition {
            AttributeType::Named(name) => {
                if builtins::is_builtin(name) {
                    Ok(builtins::scalar_label(name).to_string())
                } else if let Some(def) = schema.simple_type(&name.local_name) {
                    self.simple_scalar_label(def)
                } else if schema.complex_type(&name.local_name).is_some() {
                    Err(Error::UnsupportedSchemaFeature {
                        lineage: self.lineage_path(),
                        detail: format!(
                            "attribute {:?} references complex type {:?}",
                            decl.name, name.local_name
                        ),
                    })
                } else {
                    Err(self.dangling(name))
                }
            }
            AttributeType::Inline(def) => self.simple_scalar_label(def),
            AttributeType::Default => Ok("string".into()),
        }
    }

    /// Follows restriction chains through named simple types down to a
    /// builtin base, stopping early at the first enumeration facet.
    fn simple_scalar_label(&self, def: &SimpleTypeDefinition) -> Result<String, Error> {
        if !def.enumeration.is_empty() {
            return Ok(enum_label(&def.enumeration));
        }
        let mut seen: Vec<NCName> = def.name.iter().cloned().collect();
        let mut base = def.base.clone();
        while let Some(name) = base {
            if builtins::is_builtin(&name) {
                return Ok(builtins::scalar_label(&name).to_string());
            }
            match self.schema.simple_type(&name.local_name) {
                Some(next) => {
                    if seen.iter().any(|s| s == &name.local_name) {
                        return Ok("string".into());
                    }
                    seen.push(name.local_name.clone());
                    if !next.enumeration.is_empty() {
                        return Ok(enum_label(&next.enumeration));
                    }
                    base = next.base.clone();
                }
                None => {
                    if self.schema.complex_type(&name.local_name).is_some() {
                        return Err(Error::UnsupportedSchemaFeature {
                            lineage: self.lineage_path(),
                            detail: format!(
                                "simple type restriction of complex type {:?}",
                                name.local_name
                            ),
                        });
                    }
                    return Err(self.dangling(&name));
                }
            }
        }
        Ok("string".into())
    }
}

fn value_leaf(label: String) -> ResolvedNode {
    ResolvedNode {
        name: "value".into(),
        kind: Kind::Leaf,
        cardinality: Cardinality::One,
        min_occurs: 1,
        max_occurs: MaxOccurs::Count(1),
        leaf_type: Some(label),
        truncated: false,
        children: Vec::new(),
    }
}

fn enum_label(values: &[String]) -> String {
    let quoted = values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!("enum({quoted})")
}
