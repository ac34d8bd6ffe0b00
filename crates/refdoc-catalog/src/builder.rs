//! Catalog construction and merge policy.

use std::collections::HashMap;

use crate::catalog::{Catalog, Namespace, NamespaceId, TypeId, TypeSymbol};
use crate::graph::{NamespaceDecl, SymbolGraph, TypeDecl, qualify};

/// Result of registering a type observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// First observation of this full name.
    Inserted,
    /// An entry existed and was retained; the new observation was dropped.
    Kept,
    /// An entry existed and was replaced by the new observation.
    Replaced,
}

/// Mutable catalog under construction.
///
/// Namespaces are deduplicated by full name. Types are merged per full name:
/// an existing entry with more members wins, then an existing documented
/// entry wins over an undocumented newcomer, otherwise the newcomer replaces
/// it. Call [`build`](Self::build) to freeze the catalog.
#[derive(Debug)]
pub struct CatalogBuilder {
    namespaces: Vec<Namespace>,
    types: Vec<TypeSymbol>,
    namespace_index: HashMap<String, NamespaceId>,
    type_index: HashMap<String, TypeId>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn new() -> Self {
        let root = Namespace {
            name: String::new(),
            full_name: String::new(),
            parent: None,
            children: Vec::new(),
            types: Vec::new(),
        };
        Self {
            namespaces: vec![root],
            types: Vec::new(),
            namespace_index: HashMap::from([(String::new(), NamespaceId(0))]),
            type_index: HashMap::new(),
        }
    }

    /// Register every namespace and type of a decoded graph.
    #[must_use]
    pub fn from_graph(graph: SymbolGraph) -> Self {
        let mut builder = Self::new();
        let mut pending: Vec<(NamespaceId, NamespaceDecl)> = vec![(builder.root(), graph.root)];

        while let Some((parent, decl)) = pending.pop() {
            let id = builder.add_namespace(parent, &decl.name);
            for type_decl in decl.types {
                builder.add_or_merge(id, type_decl);
            }
            pending.extend(decl.namespaces.into_iter().rev().map(|child| (id, child)));
        }

        tracing::debug!(
            namespaces = builder.namespaces.len(),
            types = builder.types.len(),
            "Loaded symbol graph"
        );
        builder
    }

    #[must_use]
    pub fn root(&self) -> NamespaceId {
        NamespaceId(0)
    }

    /// Get or create the namespace `name` under `parent`.
    ///
    /// `name` may be dotted; each segment becomes one nesting level. An empty
    /// name returns `parent`.
    pub fn add_namespace(&mut self, parent: NamespaceId, name: &str) -> NamespaceId {
        name.split('.')
            .filter(|segment| !segment.is_empty())
            .fold(parent, |current, segment| {
                self.child_namespace(current, segment)
            })
    }

    fn child_namespace(&mut self, parent: NamespaceId, segment: &str) -> NamespaceId {
        let full_name = qualify(&self.namespaces[parent.0].full_name, segment);
        if let Some(&id) = self.namespace_index.get(&full_name) {
            return id;
        }

        let id = NamespaceId(self.namespaces.len());
        self.namespaces.push(Namespace {
            name: segment.to_owned(),
            full_name: full_name.clone(),
            parent: Some(parent),
            children: Vec::new(),
            types: Vec::new(),
        });
        self.namespaces[parent.0].children.push(id);
        self.namespace_index.insert(full_name, id);
        id
    }

    /// Register a type observation declared in `namespace`.
    pub fn add_or_merge(&mut self, namespace: NamespaceId, decl: TypeDecl) -> MergeOutcome {
        let full_name = qualify(&self.namespaces[namespace.0].full_name, &decl.name);

        let Some(&id) = self.type_index.get(&full_name) else {
            let id = TypeId(self.types.len());
            self.types.push(TypeSymbol {
                name: decl.name,
                full_name: full_name.clone(),
                kind: decl.kind,
                namespace,
                documentation: decl.documentation,
                members: decl.members,
                bases: decl.bases,
                nested: decl.nested,
            });
            self.namespaces[namespace.0].types.push(id);
            self.type_index.insert(full_name, id);
            return MergeOutcome::Inserted;
        };

        let existing = &mut self.types[id.0];
        let incoming_documented = decl
            .documentation
            .as_deref()
            .is_some_and(|d| !d.is_empty());

        let keep = existing.member_count() > decl.members.len()
            || (existing.has_documentation() && !incoming_documented);

        if keep {
            if incoming_documented && !existing.has_documentation() {
                tracing::warn!(
                    type_name = %full_name,
                    "Discarded documented observation in favour of one with more members"
                );
            } else {
                tracing::debug!(type_name = %full_name, "Kept existing type observation");
            }
            return MergeOutcome::Kept;
        }

        tracing::debug!(
            type_name = %full_name,
            members = decl.members.len(),
            previous_members = existing.member_count(),
            "Replaced type observation"
        );
        existing.kind = decl.kind;
        existing.documentation = decl.documentation;
        existing.members = decl.members;
        existing.bases = decl.bases;
        existing.nested = decl.nested;
        MergeOutcome::Replaced
    }

    /// Freeze into a read-only catalog.
    #[must_use]
    pub fn build(self) -> Catalog {
        Catalog {
            namespaces: self.namespaces,
            types: self.types,
            namespace_index: self.namespace_index,
            type_index: self.type_index,
        }
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
