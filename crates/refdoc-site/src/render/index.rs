//! Site index page.

use refdoc_markup::{MarkupWriter, escape_html};

use super::RenderContext;
use super::links::anchor_html;
use crate::paths::{NAMESPACES_PATH, document_path, relative_href};

/// Link to the API reference followed by one link per document.
pub(super) fn render(ctx: &RenderContext<'_>, from: &str, w: &mut MarkupWriter) {
    w.write(&anchor_html(&relative_href(from, NAMESPACES_PATH), "API Reference"));
    w.line_break();

    for doc in ctx.documents {
        let Ok(path) = document_path(&doc.title) else {
            continue;
        };
        w.write(&anchor_html(&relative_href(from, &path), &escape_html(&doc.title)));
        w.line_break();
    }
}
