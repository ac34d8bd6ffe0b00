//! Site generation driver.

use refdoc_catalog::Catalog;
use refdoc_sections::Document;

use crate::error::{PageError, PathError};
use crate::output::OutputSet;
use crate::page::{PageId, PageKind, PageTree};
use crate::paths::{
    INDEX_PATH, NAMESPACES_PATH, document_path, namespace_path, namespace_title, type_path,
};
use crate::render::{RenderContext, render_page};
use crate::template::Template;

/// Generator options.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneratorConfig {
    /// Emit page content without the HTML template.
    pub bare_html: bool,
}

/// A page that could not be generated.
#[derive(Debug)]
pub struct PageFailure {
    pub title: String,
    /// Intended output path; empty when the path itself could not be computed.
    pub path: String,
    pub error: PageError,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of pages written to the output set.
    pub pages: usize,
    pub failures: Vec<PageFailure>,
}

impl GenerationReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(&mut self, title: &str, path: &str, error: PageError) {
        tracing::error!(title, path, error = %error, "Failed to generate page");
        self.failures.push(PageFailure {
            title: title.to_owned(),
            path: path.to_owned(),
            error,
        });
    }
}

/// Renders the index, namespace, type and document pages into an
/// [`OutputSet`].
///
/// A page that fails is recorded in the report and skipped; every other page
/// is still generated.
#[derive(Debug)]
pub struct Generator<'a> {
    catalog: &'a Catalog,
    documents: &'a [Document],
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, documents: &'a [Document], config: GeneratorConfig) -> Self {
        Self {
            catalog,
            documents,
            config,
        }
    }

    /// Build the page tree: index, namespace listing, namespace pages, type
    /// pages and document pages.
    ///
    /// Pages whose path cannot be computed are recorded in `report`.
    pub fn page_tree(&self, report: &mut GenerationReport) -> PageTree {
        let mut tree = PageTree::new();
        let catalog = self.catalog;

        let index = add_page(
            &mut tree,
            report,
            "Index",
            Ok(INDEX_PATH.to_owned()),
            None,
            PageKind::Index,
        );
        let listing = add_page(
            &mut tree,
            report,
            "Namespaces",
            Ok(NAMESPACES_PATH.to_owned()),
            index,
            PageKind::NamespaceList,
        );

        for ns in catalog.namespaces_depth_first(catalog.root()) {
            let namespace = catalog.namespace(ns);
            let full_name = catalog.full_name(ns);
            let ns_page = add_page(
                &mut tree,
                report,
                namespace_title(full_name),
                Ok(namespace_path(full_name)),
                listing,
                PageKind::Namespace(ns),
            );
            for &ty in &namespace.types {
                let symbol = catalog.type_symbol(ty);
                add_page(
                    &mut tree,
                    report,
                    &symbol.name,
                    type_path(full_name, &symbol.name),
                    ns_page,
                    PageKind::Type(ty),
                );
            }
        }

        for (i, doc) in self.documents.iter().enumerate() {
            add_page(
                &mut tree,
                report,
                &doc.title,
                document_path(&doc.title),
                index,
                PageKind::Document(i),
            );
        }

        tree
    }

    /// Render every page into `output`.
    pub fn generate(&self, output: &mut OutputSet) -> GenerationReport {
        let mut report = GenerationReport::default();
        let pages = self.page_tree(&mut report);
        let ctx = RenderContext {
            catalog: self.catalog,
            pages: &pages,
            documents: self.documents,
            template: Template::new(self.config.bare_html),
        };

        for (id, page) in pages.iter() {
            match render_page(&ctx, id) {
                Ok(html) => {
                    if output.write(page.path.clone(), html) {
                        tracing::warn!(
                            path = %page.path,
                            "Page overwrote an earlier page with the same path"
                        );
                    }
                    tracing::debug!(path = %page.path, "Generated page");
                    report.pages += 1;
                }
                Err(error) => report.fail(&page.title, &page.path, error),
            }
        }

        tracing::info!(
            pages = report.pages,
            failures = report.failures.len(),
            "Generation finished"
        );
        report
    }
}

fn add_page(
    tree: &mut PageTree,
    report: &mut GenerationReport,
    title: &str,
    path: Result<String, PathError>,
    parent: Option<PageId>,
    kind: PageKind,
) -> Option<PageId> {
    match path.and_then(|path| tree.insert(title, path, parent, kind)) {
        Ok(id) => Some(id),
        Err(error) => {
            report.fail(title, "", error.into());
            None
        }
    }
}
