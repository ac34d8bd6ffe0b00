//! Inline link fragments shared by the API pages.

use refdoc_catalog::{Parameter, ResolveError, TypeId, TypeRef};
use refdoc_markup::{MarkupWriter, Tag, escape_html};

use super::RenderContext;
use crate::paths::{relative_href, type_path};

/// `<a href='href'>label</a>`; `label` must already be escaped.
pub(super) fn anchor_html(href: &str, label: &str) -> String {
    let mut w = MarkupWriter::new();
    w.anchor(href, &[]);
    w.write(label);
    w.close_inline(Tag::A);
    w.into_string()
}

/// Link from page `from` to the page of a catalog type.
///
/// Falls back to the escaped name when the type has no page path.
pub(super) fn type_link(ctx: &RenderContext<'_>, from: &str, id: TypeId, label: &str) -> String {
    let symbol = ctx.catalog.type_symbol(id);
    let label = escape_html(label);
    match type_path(ctx.catalog.full_name(symbol.namespace), &symbol.name) {
        Ok(path) => anchor_html(&relative_href(from, &path), &label),
        Err(_) => label,
    }
}

/// Render a type reference, linking it when it resolves to a catalog type.
///
/// `qualified` selects the dotted full name as the label instead of the
/// simple name.
pub(super) fn type_ref_html(
    ctx: &RenderContext<'_>,
    from: &str,
    type_ref: &TypeRef,
    qualified: bool,
) -> String {
    let label = if qualified {
        type_ref.full_name()
    } else {
        type_ref.name.clone()
    };

    match ctx.catalog.resolve(type_ref) {
        Ok(id) => type_link(ctx, from, id, &label),
        Err(error @ ResolveError::TypeNotFound(_)) => {
            tracing::warn!(page = %from, error = %error, "Unresolved type reference");
            escape_html(&label)
        }
        Err(error) => {
            // References into namespaces outside the graph are expected.
            tracing::debug!(page = %from, error = %error, "External type reference");
            escape_html(&label)
        }
    }
}

/// Comma-separated parameter list, without parentheses.
pub(super) fn parameters_html(ctx: &RenderContext<'_>, from: &str, params: &[Parameter]) -> String {
    params
        .iter()
        .map(|param| {
            let mut out = String::new();
            if let Some(modifier) = param.modifier {
                out.push_str(modifier.keyword());
                out.push(' ');
            }
            out.push_str(&type_ref_html(ctx, from, &param.type_ref, false));
            out.push(' ');
            out.push_str(&escape_html(&param.name));
            if let Some(default) = &param.default {
                out.push_str(" = ");
                out.push_str(&escape_html(default));
            }
            out
        })
        .collect::<Vec<_>>()
        .join(", ")
}
