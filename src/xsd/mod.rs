pub mod attribute_decl;
pub mod attribute_group_def;
pub mod attribute_use;
pub mod builtins;
pub mod complex_type_def;
pub mod element_decl;
pub mod model_group;
pub mod model_group_def;
pub mod particle;
pub mod schema;
pub mod simple_type_def;
pub mod xstypes;

pub use attribute_decl::{AttributeDeclaration, AttributeType};
pub use attribute_group_def::AttributeGroupDefinition;
pub use attribute_use::AttributeUse;
pub use complex_type_def::{ComplexTypeDefinition, Content};
pub use element_decl::{ElementContent, ElementDeclaration};
pub use model_group::{Compositor, ModelGroup};
pub use model_group_def::ModelGroupDefinition;
pub use particle::{MaxOccurs, Particle, Term};
pub use schema::Schema;
pub use simple_type_def::SimpleTypeDefinition;
pub use xstypes::{AnyURI, NCName, QName, Sequence};

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

/// Parses one XSD document into its component index.
///
/// Published CAPEC schemas occasionally ship with mangled documentation
/// close tags that trip the XML parser; when the first parse fails the text
/// is repaired once and reparsed before giving up.
pub fn parse_schema(text: &str, options: roxmltree::ParsingOptions) -> Result<Schema, Error> {
    match roxmltree::Document::parse_with_options(text, options) {
        Ok(doc) => Schema::map_from_xml(doc.root_element()),
        Err(err) => {
            let Some(sanitized) = sanitize_documentation_tags(text) else {
                return Err(Error::SchemaParse(err.to_string()));
            };
            let doc = roxmltree::Document::parse_with_options(&sanitized, options)
                .map_err(|err| Error::SchemaParse(err.to_string()))?;
            Schema::map_from_xml(doc.root_element())
        }
    }
}

lazy_static! {
    static ref BROKEN_DOC_OPEN: Regex = Regex::new(r"<x/[^>]*:documentation>").unwrap();
    static ref BROKEN_DOC_CLOSE: Regex = Regex::new(r"</x/[^>]*:documentation>").unwrap();
}

fn sanitize_documentation_tags(text: &str) -> Option<String> {
    if !BROKEN_DOC_OPEN.is_match(text) && !BROKEN_DOC_CLOSE.is_match(text) {
        return None;
    }
    let fixed = BROKEN_DOC_CLOSE.replace_all(text, "</xs:documentation>");
    let fixed = BROKEN_DOC_OPEN.replace_all(&fixed, "<xs:documentation>");
    Some(fixed.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCHEMA: &str = r#"
        <xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
                   targetNamespace="http://capec.mitre.org/capec-3">
            <xs:element name="attack_pattern" type="AttackPatternType"/>
            <xs:complexType name="AttackPatternType">
                <xs:sequence>
                    <xs:element name="description" type="xs:string"/>
                </xs:sequence>
            </xs:complexType>
            <xs:simpleType name="StatusEnumeration">
                <xs:restriction base="xs:string">
                    <xs:enumeration value="Draft"/>
                    <xs:enumeration value="Stable"/>
                </xs:restriction>
            </xs:simpleType>
            <xs:attributeGroup name="CommonAttributes">
                <xs:attribute name="ID" type="xs:integer" use="required"/>
            </xs:attributeGroup>
            <xs:group name="ReferencesGroup">
                <xs:sequence>
                    <xs:element name="reference" type="xs:anyURI"/>
                </xs:sequence>
            </xs:group>
        </xs:schema>"#;

    #[test]
    fn indexes_top_level_components() {
        let schema = parse_schema(SCHEMA, roxmltree::ParsingOptions::default()).unwrap();
        assert_eq!(
            schema.target_namespace.as_deref(),
            Some("http://capec.mitre.org/capec-3")
        );
        assert!(schema.element("attack_pattern").is_some());
        assert!(schema.complex_type("AttackPatternType").is_some());
        assert!(schema.simple_type("StatusEnumeration").is_some());
        assert!(schema.attribute_group("CommonAttributes").is_some());
        assert!(schema.model_group("ReferencesGroup").is_some());
        assert!(schema.element("nope").is_none());
    }

    #[test]
    fn rejects_non_schema_root() {
        let err = parse_schema("<not-a-schema/>", roxmltree::ParsingOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::SchemaParse(_)));
    }

    #[test]
    fn rejects_malformed_xml() {
        let err = parse_schema("<xs:schema", roxmltree::ParsingOptions::default()).unwrap_err();
        assert!(matches!(err, Error::SchemaParse(_)));
    }

    #[test]
    fn repairs_mangled_documentation_tags() {
        let broken = r#"
            <xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                <xs:annotation>
                    <x/xs:documentation>text</x/xs:documentation>
                </xs:annotation>
                <xs:element name="weakness" type="xs:string"/>
            </xs:schema>"#;
        let schema = parse_schema(broken, roxmltree::ParsingOptions::default()).unwrap();
        assert!(schema.element("weakness").is_some());
    }

    #[test]
    fn enumeration_facets_are_collected() {
        let schema = parse_schema(SCHEMA, roxmltree::ParsingOptions::default()).unwrap();
        let def = schema.simple_type("StatusEnumeration").unwrap();
        assert_eq!(def.enumeration, vec!["Draft", "Stable"]);
        assert_eq!(def.base.as_ref().unwrap().local_name, "string");
    }
}
