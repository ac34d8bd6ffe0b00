//! Symbol kinds.

use serde::{Deserialize, Serialize};

/// Kind of a type symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Delegate,
    Enum,
}

impl TypeKind {
    /// Every kind, in the order namespace pages list them.
    pub const ALL: [Self; 5] = [
        Self::Class,
        Self::Struct,
        Self::Interface,
        Self::Delegate,
        Self::Enum,
    ];

    /// Singular display label, e.g. `"Class"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Struct => "Struct",
            Self::Interface => "Interface",
            Self::Delegate => "Delegate",
            Self::Enum => "Enum",
        }
    }

    /// Plural section title, e.g. `"Classes"`.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Class => "Classes",
            Self::Struct => "Structures",
            Self::Interface => "Interfaces",
            Self::Delegate => "Delegates",
            Self::Enum => "Enumerations",
        }
    }
}

/// Kind of a member symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Constructor,
    Property,
    Field,
    Method,
    Event,
}

impl MemberKind {
    /// Every kind, in the order type pages list them.
    pub const ALL: [Self; 5] = [
        Self::Constructor,
        Self::Property,
        Self::Field,
        Self::Method,
        Self::Event,
    ];

    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Constructor => "Constructors",
            Self::Property => "Properties",
            Self::Field => "Fields",
            Self::Method => "Methods",
            Self::Event => "Events",
        }
    }

    /// Whether members of this kind take a parameter list.
    #[must_use]
    pub fn has_parameters(self) -> bool {
        matches!(self, Self::Constructor | Self::Method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_kind_serde_lowercase() {
        let kind: TypeKind = serde_json::from_str("\"struct\"").unwrap();
        assert_eq!(kind, TypeKind::Struct);
        assert_eq!(serde_json::to_string(&TypeKind::Enum).unwrap(), "\"enum\"");
    }

    #[test]
    fn test_plural_titles() {
        assert_eq!(TypeKind::Struct.plural(), "Structures");
        assert_eq!(TypeKind::Enum.plural(), "Enumerations");
        assert_eq!(MemberKind::Property.plural(), "Properties");
    }

    #[test]
    fn test_has_parameters() {
        assert!(MemberKind::Method.has_parameters());
        assert!(MemberKind::Constructor.has_parameters());
        assert!(!MemberKind::Field.has_parameters());
    }
}
