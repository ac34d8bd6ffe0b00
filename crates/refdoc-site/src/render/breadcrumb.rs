//! Breadcrumb trail.

use refdoc_markup::{MarkupError, MarkupWriter, Tag, escape_html};

use crate::page::{PageId, PageTree};
use crate::paths::relative_href;

pub(super) fn render(
    w: &mut MarkupWriter,
    pages: &PageTree,
    id: PageId,
) -> Result<(), MarkupError> {
    let from = &pages.get(id).path;

    w.open_tag_indented(Tag::Ol, &[("class", "breadcrumb")]);
    for crumb in pages.breadcrumb(id) {
        if crumb.is_active {
            w.open_tag(Tag::Li, &[("class", "active")]);
        } else {
            w.open_tag(Tag::Li, &[]);
            w.anchor(&relative_href(from, &crumb.path), &[]);
        }
        if crumb.is_home {
            w.glyph_icon("home");
        }
        w.write(&escape_html(&crumb.title));
        if !crumb.is_active {
            w.close_inline(Tag::A);
        }
        w.close_tag()?;
    }
    w.close_tag_indented()
}
