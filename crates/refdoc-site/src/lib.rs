//! Page paths, page tree and HTML generation for refdoc.
//!
//! This crate maps catalog symbols and prose documents to output paths,
//! arranges pages into a tree for breadcrumb navigation and renders every
//! page into an [`OutputSet`] through the [`Generator`].
//!
//! # Example
//!
//! ```
//! use refdoc_catalog::{CatalogBuilder, TypeDecl, TypeKind};
//! use refdoc_site::{Generator, GeneratorConfig, OutputSet};
//!
//! let mut builder = CatalogBuilder::new();
//! let ns = builder.add_namespace(builder.root(), "A.B.C");
//! builder.add_or_merge(ns, TypeDecl::new("Widget", TypeKind::Class));
//! let catalog = builder.build();
//!
//! let mut output = OutputSet::new();
//! let report = Generator::new(&catalog, &[], GeneratorConfig::default()).generate(&mut output);
//!
//! assert!(report.is_success());
//! assert!(output.contains("classes/A/B/C/Widget.html"));
//! ```

mod error;
mod generator;
mod output;
mod page;
mod paths;
mod render;
mod template;

pub use error::{PageError, PathError};
pub use generator::{GenerationReport, Generator, GeneratorConfig, PageFailure};
pub use output::OutputSet;
pub use page::{Crumb, Page, PageId, PageKind, PageTree};
pub use paths::{
    INDEX_PATH, NAMESPACES_PATH, ROOT_NAMESPACE_NAME, document_path, namespace_path,
    namespace_title, relative_href, relative_prefix, root_prefix, type_path,
};
pub use template::{SCRIPTS, STYLESHEETS, Template};
