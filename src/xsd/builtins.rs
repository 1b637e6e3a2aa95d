use std::collections::HashMap;

use lazy_static::lazy_static;

use super::xstypes::QName;

/// Namespace of the schema language itself (pt. 1, §1.3.1)
pub const XS_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

lazy_static! {
    /// Coarse scalar labels for the builtin simple types that occur in the
    /// supported taxonomy schemas.
    static ref SCALAR_LABELS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("string", "string");
        m.insert("token", "string");
        m.insert("normalizedString", "string");
        m.insert("anyURI", "string");
        m.insert("gYear", "string");
        m.insert("gMonth", "string");
        m.insert("gDay", "string");
        m.insert("integer", "int");
        m.insert("int", "int");
        m.insert("long", "int");
        m.insert("short", "int");
        m.insert("nonNegativeInteger", "int");
        m.insert("positiveInteger", "int");
        m.insert("boolean", "bool");
        m.insert("date", "date");
        m.insert("decimal", "float");
        m.insert("double", "float");
        m.insert("float", "float");
        m
    };
}

pub fn is_builtin(name: &QName) -> bool {
    name.namespace_name.as_deref() == Some(XS_NAMESPACE)
}

/// Scalar label for a builtin type name. Builtin types without a dedicated
/// label (xs:ID, xs:NMTOKEN, ...) render as `string`.
pub fn scalar_label(name: &QName) -> &'static str {
    SCALAR_LABELS
        .get(name.local_name.as_str())
        .copied()
        .unwrap_or("string")
}
