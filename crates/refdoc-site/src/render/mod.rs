//! Page renderers.
//!
//! Every page is rendered into its own [`MarkupWriter`] inside the shared
//! [`Template`]. Symbol names, titles and documentation are escaped here;
//! the writer emits whatever it is given.

mod breadcrumb;
mod document;
mod index;
mod links;
mod namespace;
mod namespaces;
mod types;

use refdoc_catalog::Catalog;
use refdoc_markup::MarkupWriter;
use refdoc_sections::Document;

use crate::error::PageError;
use crate::page::{PageId, PageKind, PageTree};
use crate::paths::root_prefix;
use crate::template::Template;

/// Shared inputs for rendering pages.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RenderContext<'a> {
    pub catalog: &'a Catalog,
    pub pages: &'a PageTree,
    pub documents: &'a [Document],
    pub template: Template,
}

/// Render one page of the tree to HTML.
pub(crate) fn render_page(ctx: &RenderContext<'_>, id: PageId) -> Result<String, PageError> {
    let page = ctx.pages.get(id);
    let prefix = root_prefix(&page.path);
    let mut w = MarkupWriter::new();

    ctx.template
        .render(&mut w, &page.title, &prefix, |w| match page.kind {
            PageKind::Document(index) => match ctx.documents.get(index) {
                Some(doc) => document::render(ctx, id, doc, w),
                None => Ok(()),
            },
            kind => {
                w.div(&[("class", "span12 content")]);
                if kind != PageKind::Index {
                    breadcrumb::render(w, ctx.pages, id)?;
                }
                match kind {
                    PageKind::Index => index::render(ctx, &page.path, w),
                    PageKind::NamespaceList => namespaces::render(ctx, &page.path, w)?,
                    PageKind::Namespace(ns) => namespace::render(ctx, &page.path, ns, w)?,
                    PageKind::Type(ty) => types::render(ctx, &page.path, ty, w)?,
                    PageKind::Document(_) => {}
                }
                w.close_tag_indented()?;
                Ok(())
            }
        })?;

    Ok(w.finish()?)
}
