//! Prose document page: sidebar table of contents plus body.

use refdoc_markup::{MarkupError, MarkupWriter, Tag, escape_html};
use refdoc_sections::{BlockKind, Document, SectionTree, slug};

use super::{RenderContext, breadcrumb};
use crate::error::PageError;
use crate::page::PageId;

/// Deepest heading level listed in the sidebar.
const MAX_TOC_LEVEL: u8 = 2;

pub(super) fn render(
    ctx: &RenderContext<'_>,
    id: PageId,
    doc: &Document,
    w: &mut MarkupWriter,
) -> Result<(), PageError> {
    let tree = doc.index();

    w.div(&[("class", "span3 sidebar")]);
    w.comment("Sidebar content");
    sidebar(&tree, w)?;
    w.close_tag_indented()?;

    w.div(&[("class", "span9 content")]);
    w.comment("Body content");
    breadcrumb::render(w, ctx.pages, id)?;
    body(doc, w)?;
    w.close_tag_indented()?;
    Ok(())
}

fn sidebar(tree: &SectionTree, w: &mut MarkupWriter) -> Result<(), MarkupError> {
    w.div(&[("class", "contents well well-small")]);
    w.content(Tag::Div, "Contents", &[("class", "nav-header")]);

    w.open_tag_indented(Tag::Ul, &[("class", "nav nav-list nav-sidebar")]);
    for (_, section) in tree.walk() {
        let Some(heading) = tree.heading(section) else {
            continue;
        };
        if heading.level > MAX_TOC_LEVEL {
            continue;
        }
        if heading.level == 1 {
            w.inline_tag(Tag::Li, &[("class", "divider")]);
            w.end_tag(Tag::Li);
        }
        w.open_tag_indented(Tag::Li, &[]);
        w.anchor(&format!("#{}", heading.slug), &[]);
        w.write(&escape_html(&heading.text));
        w.end_tag(Tag::A);
        w.close_tag_indented()?;
    }
    w.close_tag_indented()?; // ul

    w.close_tag_indented() // contents
}

fn body(doc: &Document, w: &mut MarkupWriter) -> Result<(), MarkupError> {
    for block in &doc.blocks {
        match &block.kind {
            BlockKind::Heading(level) => {
                let id = slug(&block.text);
                w.section(&[("id", id.as_str())]);
                w.heading(&escape_html(&block.text), *level);
                if *level == 1 {
                    w.inline_tag(Tag::Div, &[("class", "divider")]);
                    w.end_tag(Tag::Div);
                }
                w.close_tag_indented()?;
            }
            BlockKind::Code { lang } => {
                let class = lang.as_deref().map_or_else(
                    || "sunlight-highlight-text".to_owned(),
                    |lang| format!("sunlight-highlight-{}", escape_html(lang)),
                );
                w.write_raw(&format!(
                    "<pre class='{class}'>{}</pre>\n",
                    escape_html(&block.text)
                ));
            }
            BlockKind::Paragraph | BlockKind::Other => w.write_line(&block.text),
        }
    }
    Ok(())
}
