//! Bootstrap page template.

use refdoc_markup::{MarkupWriter, Tag, escape_html};

use crate::error::PageError;

/// Stylesheets linked from every page, relative to the output root.
pub const STYLESHEETS: &[&str] = &[
    "css/bootstrap.css",
    "css/docs.css",
    "css/syntax.css",
    "sunlight/themes/sunlight.default.css",
];

/// Scripts linked from every page, relative to the output root.
pub const SCRIPTS: &[&str] = &[
    "js/jquery.js",
    "js/bootstrap.js",
    "sunlight/sunlight-min.js",
    "sunlight/plugins/sunlight-plugin.linenumbers.js",
    "sunlight/lang/sunlight.csharp-min.js",
    "sunlight/jquery.sunlight.js",
];

/// HTML shell wrapped around every page's content.
#[derive(Clone, Copy, Debug, Default)]
pub struct Template {
    /// Emit page content only, without document head or body.
    pub bare_html: bool,
}

impl Template {
    #[must_use]
    pub fn new(bare_html: bool) -> Self {
        Self { bare_html }
    }

    /// Render `content` inside the template.
    ///
    /// `root_prefix` leads from the page back to the output root and is
    /// prepended to every asset link.
    ///
    /// # Errors
    ///
    /// Propagates errors from `content` and markup errors from the shell.
    pub fn render<F>(
        &self,
        w: &mut MarkupWriter,
        title: &str,
        root_prefix: &str,
        content: F,
    ) -> Result<(), PageError>
    where
        F: FnOnce(&mut MarkupWriter) -> Result<(), PageError>,
    {
        if self.bare_html {
            return content(w);
        }

        w.doctype();
        w.open_tag_indented(Tag::Html, &[("lang", "en")]);
        Self::head(w, title, root_prefix)?;

        w.open_tag_indented(
            Tag::Body,
            &[
                ("class", "docs"),
                ("data-spy", "scroll"),
                ("data-target", "nav-sidebar"),
            ],
        );
        w.div(&[("class", "container")]);
        w.div(&[("class", "row")]);

        content(w)?;

        w.close_tag_indented()?; // row
        w.close_tag_indented()?; // container
        w.close_tag_indented()?; // body
        w.close_tag_indented()?; // html
        Ok(())
    }

    fn head(w: &mut MarkupWriter, title: &str, root_prefix: &str) -> Result<(), PageError> {
        w.open_tag_indented(Tag::Head, &[]);
        w.inline_tag(Tag::Meta, &[("charset", "utf-8")]);
        w.new_line();

        w.set_link_prefix(root_prefix);
        for href in STYLESHEETS {
            w.link(href, &[("rel", "stylesheet"), ("media", "screen")]);
        }
        for src in SCRIPTS {
            w.javascript(src);
        }
        w.set_link_prefix("");

        w.open_tag_indented(Tag::Script, &[]);
        w.write_line("$(document).ready( function($) {");
        w.write_line("    $('pre').sunlight({ lineNumbers: true })");
        w.write_line("})");
        w.close_tag_indented()?;

        w.content(Tag::Title, &escape_html(title), &[]);
        w.close_tag_indented()?; // head
        Ok(())
    }
}
