use std::fmt;

use crate::error::Error;

pub type NCName = String;
pub type AnyURI = String;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace_name: Option<AnyURI>,
    pub local_name: NCName,
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(namespace_name) = self.namespace_name.as_ref() {
            write!(f, "{{{}}}:{}", namespace_name, self.local_name)
        } else {
            write!(f, "{}", self.local_name)
        }
    }
}

impl QName {
    pub fn with_namespace(
        namespace_name: impl Into<String>,
        local_name: impl Into<String>,
    ) -> Self {
        Self::with_optional_namespace(Some(namespace_name), local_name)
    }

    pub fn with_optional_namespace(
        namespace_name: Option<impl Into<String>>,
        local_name: impl Into<String>,
    ) -> Self {
        Self {
            namespace_name: namespace_name.map(Into::into),
            local_name: local_name.into(),
        }
    }

    /// Resolves a lexical QName (`xs:string`, `MitigationList`) against the
    /// namespace declarations in scope at `context`.
    pub fn parse(source: &str, context: roxmltree::Node) -> Result<Self, Error> {
        if let Some((prefix, local)) = source.rsplit_once(':') {
            let namespace_name = if prefix == "xml" {
                // The prefix xml is by definition bound to the namespace name
                // http://www.w3.org/XML/1998/namespace.
                // (Namespaces in XML 1.0, §3, Reserved Prefixes and Namespace Names)
                "http://www.w3.org/XML/1998/namespace"
            } else {
                context.lookup_namespace_uri(Some(prefix)).ok_or_else(|| {
                    Error::SchemaParse(format!("prefix {prefix:?} is not bound to a namespace"))
                })?
            };
            Ok(Self::with_namespace(namespace_name, local))
        } else {
            let namespace_name = context.lookup_namespace_uri(None);
            Ok(Self::with_optional_namespace(namespace_name, source))
        }
    }
}

pub type Sequence<T> = Vec<T>;
