//! Namespace listing page.

use refdoc_catalog::NamespaceId;
use refdoc_markup::{MarkupError, MarkupWriter, Tag, escape_html};

use super::RenderContext;
use super::links::anchor_html;
use crate::paths::{namespace_path, relative_href};

/// Named namespaces that declare at least one type, sorted
/// case-insensitively by full name.
fn listed_namespaces(ctx: &RenderContext<'_>) -> Vec<NamespaceId> {
    let catalog = ctx.catalog;
    let mut listed: Vec<NamespaceId> = catalog
        .namespaces_depth_first(catalog.root())
        .filter(|&id| {
            let ns = catalog.namespace(id);
            !ns.is_root() && !ns.types.is_empty()
        })
        .collect();
    listed.sort_by_cached_key(|&id| catalog.full_name(id).to_lowercase());
    listed
}

pub(super) fn render(
    ctx: &RenderContext<'_>,
    from: &str,
    w: &mut MarkupWriter,
) -> Result<(), MarkupError> {
    w.open_tag_indented(Tag::Ul, &[]);
    for id in listed_namespaces(ctx) {
        let full_name = ctx.catalog.full_name(id);
        let href = relative_href(from, &namespace_path(full_name));

        w.open_tag(Tag::Li, &[]);
        w.write(&anchor_html(&href, &escape_html(full_name)));
        w.close_tag()?;
    }
    w.close_tag_indented()
}
