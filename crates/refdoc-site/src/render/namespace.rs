//! Namespace page.

use refdoc_catalog::{NamespaceId, TypeKind};
use refdoc_markup::{MarkupError, MarkupWriter, Tag, escape_html};

use super::RenderContext;
use super::links::type_link;
use crate::paths::namespace_title;

/// One table per type kind present in the namespace.
pub(super) fn render(
    ctx: &RenderContext<'_>,
    from: &str,
    ns: NamespaceId,
    w: &mut MarkupWriter,
) -> Result<(), MarkupError> {
    let title = namespace_title(ctx.catalog.full_name(ns));
    w.heading(&format!("{} Namespace", escape_html(title)), 3);

    for kind in TypeKind::ALL {
        entities(ctx, from, ns, kind, w)?;
    }
    Ok(())
}

fn entities(
    ctx: &RenderContext<'_>,
    from: &str,
    ns: NamespaceId,
    kind: TypeKind,
    w: &mut MarkupWriter,
) -> Result<(), MarkupError> {
    let types = ctx.catalog.types_by_kind(ns, kind);
    if types.is_empty() {
        return Ok(());
    }

    w.inline_tag(Tag::H4, &[]);
    w.glyph_icon("expand");
    w.write(kind.plural());
    w.end_tag(Tag::H4);

    w.open_tag_indented(
        Tag::Table,
        &[("class", "table table-bordered table-striped table-condensed")],
    );
    for id in types {
        let symbol = ctx.catalog.type_symbol(id);
        w.open_tag_indented(Tag::Tr, &[]);

        w.open_tag(Tag::Td, &[("class", "col-xs-3")]);
        w.write(&type_link(ctx, from, id, &symbol.name));
        w.close_tag()?;

        w.open_tag(Tag::Td, &[]);
        if let Some(doc) = &symbol.documentation {
            w.write(&escape_html(doc));
        }
        w.close_tag()?;

        w.close_tag_indented()?; // tr
    }
    w.close_tag_indented() // table
}
