//! Catalog lookup errors.

/// Reason a type reference could not be resolved to a catalog entry.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Namespace not found: {0}")]
    NamespaceNotFound(String),
    #[error("Type not found: {0}")]
    TypeNotFound(String),
}
