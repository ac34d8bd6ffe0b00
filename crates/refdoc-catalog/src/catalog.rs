//! Read-only symbol catalog.

use std::collections::HashMap;

use crate::error::ResolveError;
use crate::graph::{Member, TypeRef};
use crate::kind::TypeKind;

/// Index of a namespace in the catalog arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceId(pub(crate) usize);

/// Index of a type in the catalog arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub(crate) usize);

/// A namespace and its direct contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace {
    /// Simple name; empty for the global namespace.
    pub name: String,
    /// Dotted fully qualified name; empty for the global namespace.
    pub full_name: String,
    pub parent: Option<NamespaceId>,
    pub children: Vec<NamespaceId>,
    pub types: Vec<TypeId>,
}

impl Namespace {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// The retained observation of a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSymbol {
    pub name: String,
    pub full_name: String,
    pub kind: TypeKind,
    /// Declaring namespace.
    pub namespace: NamespaceId,
    pub documentation: Option<String>,
    pub members: Vec<Member>,
    pub bases: Vec<TypeRef>,
    pub nested: Vec<TypeRef>,
}

impl TypeSymbol {
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn has_documentation(&self) -> bool {
        self.documentation.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// Frozen catalog of namespaces and types.
///
/// Produced by [`CatalogBuilder::build`](crate::CatalogBuilder::build); no
/// entry changes afterwards.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub(crate) namespaces: Vec<Namespace>,
    pub(crate) types: Vec<TypeSymbol>,
    pub(crate) namespace_index: HashMap<String, NamespaceId>,
    pub(crate) type_index: HashMap<String, TypeId>,
}

impl Catalog {
    /// The global namespace.
    #[must_use]
    pub fn root(&self) -> NamespaceId {
        NamespaceId(0)
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalog's builder.
    #[must_use]
    pub fn namespace(&self, id: NamespaceId) -> &Namespace {
        &self.namespaces[id.0]
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalog's builder.
    #[must_use]
    pub fn type_symbol(&self, id: TypeId) -> &TypeSymbol {
        &self.types[id.0]
    }

    /// Number of distinct types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Look up a namespace by dotted name; `""` is the global namespace.
    #[must_use]
    pub fn namespace_by_name(&self, full_name: &str) -> Option<NamespaceId> {
        self.namespace_index.get(full_name).copied()
    }

    /// Look up a type id by dotted fully qualified name.
    #[must_use]
    pub fn type_id(&self, full_name: &str) -> Option<TypeId> {
        self.type_index.get(full_name).copied()
    }

    /// Look up a type by dotted fully qualified name.
    #[must_use]
    pub fn get_type(&self, full_name: &str) -> Option<&TypeSymbol> {
        self.type_id(full_name).map(|id| self.type_symbol(id))
    }

    /// Resolve a type reference to a catalog entry.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NamespaceNotFound`] when the referenced namespace is
    /// not in the catalog, [`ResolveError::TypeNotFound`] when the namespace
    /// exists but does not declare the type.
    pub fn resolve(&self, type_ref: &TypeRef) -> Result<TypeId, ResolveError> {
        if self.namespace_by_name(&type_ref.namespace).is_none() {
            return Err(ResolveError::NamespaceNotFound(type_ref.namespace.clone()));
        }
        self.type_id(&type_ref.full_name())
            .ok_or_else(|| ResolveError::TypeNotFound(type_ref.full_name()))
    }

    /// Dotted name of a namespace; empty for the global namespace.
    #[must_use]
    pub fn full_name(&self, id: NamespaceId) -> &str {
        &self.namespace(id).full_name
    }

    /// Named ancestors of a namespace, outermost first, excluding the
    /// namespace itself and the global namespace.
    #[must_use]
    pub fn ancestors(&self, id: NamespaceId) -> Vec<NamespaceId> {
        let mut chain = Vec::new();
        let mut current = self.namespace(id).parent;
        while let Some(parent) = current {
            let ns = self.namespace(parent);
            if ns.is_root() {
                break;
            }
            chain.push(parent);
            current = ns.parent;
        }
        chain.reverse();
        chain
    }

    /// Types of `kind` declared directly in `namespace`, sorted
    /// case-insensitively by simple name.
    #[must_use]
    pub fn types_by_kind(&self, namespace: NamespaceId, kind: TypeKind) -> Vec<TypeId> {
        let mut ids: Vec<TypeId> = self
            .namespace(namespace)
            .types
            .iter()
            .copied()
            .filter(|&id| self.type_symbol(id).kind == kind)
            .collect();
        ids.sort_by_cached_key(|&id| self.type_symbol(id).name.to_lowercase());
        ids
    }

    /// Pre-order walk of `start` and every namespace nested in it.
    #[must_use]
    pub fn namespaces_depth_first(&self, start: NamespaceId) -> DepthFirst<'_> {
        DepthFirst {
            catalog: self,
            stack: vec![start],
        }
    }
}

/// Pre-order namespace iterator backed by an explicit stack.
///
/// Children are visited in declaration order. The iterator is finite and not
/// restartable.
#[derive(Debug)]
pub struct DepthFirst<'a> {
    catalog: &'a Catalog,
    stack: Vec<NamespaceId>,
}

impl Iterator for DepthFirst<'_> {
    type Item = NamespaceId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let children = &self.catalog.namespace(id).children;
        self.stack.extend(children.iter().rev().copied());
        Some(id)
    }
}
