//! Symbol catalog for refdoc.
//!
//! A symbol graph ([`SymbolGraph`]) describes namespaces, the types declared
//! in them and their members. The same type may be observed several times
//! (partial declarations, repeated references); [`CatalogBuilder`] merges
//! those observations into exactly one entry per fully qualified name and
//! [`CatalogBuilder::build`] freezes the result into a read-only
//! [`Catalog`].
//!
//! Namespaces and types live in arenas addressed by [`NamespaceId`] and
//! [`TypeId`]; back-references (a type's namespace, a namespace's parent) are
//! plain indices.
//!
//! # Example
//!
//! ```
//! use refdoc_catalog::{CatalogBuilder, MergeOutcome, TypeDecl, TypeKind};
//!
//! let mut builder = CatalogBuilder::new();
//! let ns = builder.add_namespace(builder.root(), "Shapes");
//! let outcome = builder.add_or_merge(ns, TypeDecl::new("Circle", TypeKind::Class));
//! assert_eq!(outcome, MergeOutcome::Inserted);
//!
//! let catalog = builder.build();
//! assert!(catalog.get_type("Shapes.Circle").is_some());
//! ```

mod builder;
mod catalog;
mod error;
mod graph;
mod kind;

pub use builder::{CatalogBuilder, MergeOutcome};
pub use catalog::{Catalog, DepthFirst, Namespace, NamespaceId, TypeId, TypeSymbol};
pub use error::ResolveError;
pub use graph::{Member, NamespaceDecl, ParamModifier, Parameter, SymbolGraph, TypeDecl, TypeRef};
pub use kind::{MemberKind, TypeKind};
