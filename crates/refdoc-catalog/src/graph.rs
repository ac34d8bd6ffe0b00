//! Serialized symbol graph.
//!
//! This is the input format: a tree of namespace declarations rooted at the
//! unnamed global namespace. A namespace name may be dotted (`"A.B"`), which
//! is equivalent to nesting `B` inside `A`. The same namespace or type may be
//! declared more than once; the catalog builder merges them.

use serde::{Deserialize, Serialize};

use crate::kind::{MemberKind, TypeKind};

/// Decoded symbol graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolGraph {
    pub root: NamespaceDecl,
}

impl SymbolGraph {
    /// Decode a graph from JSON.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the input is malformed or does not match the
    /// graph shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One namespace declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDecl {
    /// Simple or dotted name; empty for the global namespace.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespaces: Vec<NamespaceDecl>,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// One observation of a type declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub members: Vec<Member>,
    /// Base types, nearest first.
    #[serde(default)]
    pub bases: Vec<TypeRef>,
    /// Types declared inside this one.
    #[serde(default)]
    pub nested: Vec<TypeRef>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            documentation: None,
            members: Vec::new(),
            bases: Vec::new(),
            nested: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.bases.push(base);
        self
    }

    #[must_use]
    pub fn with_nested(mut self, nested: TypeRef) -> Self {
        self.nested.push(nested);
        self
    }
}

/// Member of a type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Return, property, field or event type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_ref: Option<TypeRef>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Member {
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            documentation: None,
            type_ref: None,
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, type_ref: TypeRef) -> Self {
        self.type_ref = Some(type_ref);
        self
    }

    #[must_use]
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// Reference to a type by namespace and simple name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Dotted namespace; empty for the global namespace.
    #[serde(default)]
    pub namespace: String,
    pub name: String,
}

impl TypeRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Dotted fully qualified name.
    #[must_use]
    pub fn full_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }
}

/// Method or constructor parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<ParamModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            modifier: None,
            default: None,
        }
    }
}

/// Pass-by-reference modifier of a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamModifier {
    Ref,
    Out,
}

impl ParamModifier {
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Ref => "ref",
            Self::Out => "out",
        }
    }
}

/// Join a dotted namespace and a simple name.
pub(crate) fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_owned()
    } else {
        format!("{namespace}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_json() {
        let json = r#"{
            "root": {
                "namespaces": [{
                    "name": "Shapes",
                    "types": [{
                        "name": "Circle",
                        "kind": "class",
                        "documentation": "A round shape.",
                        "bases": [{ "namespace": "System", "name": "Object" }],
                        "nested": [{ "namespace": "Shapes", "name": "Arc" }],
                        "members": [{
                            "name": "Scale",
                            "kind": "method",
                            "type": { "namespace": "System", "name": "Void" },
                            "parameters": [{
                                "name": "factor",
                                "type": { "namespace": "System", "name": "Double" },
                                "modifier": "ref",
                                "default": "1.0"
                            }]
                        }]
                    }]
                }]
            }
        }"#;

        let graph = SymbolGraph::from_json(json).unwrap();
        assert_eq!(graph.root.name, "");
        let circle = &graph.root.namespaces[0].types[0];
        assert_eq!(circle.kind, TypeKind::Class);
        assert_eq!(circle.bases, vec![TypeRef::new("System", "Object")]);
        assert_eq!(circle.nested, vec![TypeRef::new("Shapes", "Arc")]);

        let scale = &circle.members[0];
        assert_eq!(scale.type_ref, Some(TypeRef::new("System", "Void")));
        assert_eq!(scale.parameters[0].modifier, Some(ParamModifier::Ref));
        assert_eq!(scale.parameters[0].default.as_deref(), Some("1.0"));
    }

    #[test]
    fn test_from_json_optional_lists_default_to_empty() {
        let json = r#"{ "root": { "types": [{ "name": "Program", "kind": "class" }] } }"#;
        let graph = SymbolGraph::from_json(json).unwrap();
        let program = &graph.root.types[0];
        assert!(program.bases.is_empty());
        assert!(program.nested.is_empty());
        assert!(program.members.is_empty());
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let json = r#"{ "root": { "types": [{ "name": "X", "kind": "module" }] } }"#;
        assert!(SymbolGraph::from_json(json).is_err());
    }

    #[test]
    fn test_type_ref_full_name() {
        assert_eq!(TypeRef::new("A.B", "C").full_name(), "A.B.C");
        assert_eq!(TypeRef::new("", "Program").full_name(), "Program");
    }
}
