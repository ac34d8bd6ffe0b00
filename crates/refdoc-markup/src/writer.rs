//! Stateful markup emitter with an open-tag stack.

use crate::error::MarkupError;
use crate::tag::Tag;

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Attribute as an ordered `(name, value)` pair.
pub type Attr<'a> = (&'a str, &'a str);

/// Indentation- and tag-stack-aware HTML text emitter.
///
/// Tags opened with [`open_tag`](Self::open_tag) or
/// [`open_tag_indented`](Self::open_tag_indented) are pushed onto an internal
/// stack and closed in reverse order by [`close_tag`](Self::close_tag) and
/// [`close_tag_indented`](Self::close_tag_indented). Every line started while
/// the writer is indented is prefixed with `depth * indent_width` spaces.
///
/// A writer belongs to exactly one page. It is not meant to be shared between
/// concurrently generated pages.
#[derive(Debug)]
pub struct MarkupWriter {
    buf: String,
    tags: Vec<Tag>,
    depth: usize,
    indent_width: usize,
    line_start: bool,
    link_prefix: String,
}

impl MarkupWriter {
    /// Create an empty writer with the default indentation width.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(4096),
            tags: Vec::new(),
            depth: 0,
            indent_width: DEFAULT_INDENT_WIDTH,
            line_start: true,
            link_prefix: String::new(),
        }
    }

    /// Set the number of spaces per indentation level.
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the prefix prepended to asset URLs emitted by [`link`](Self::link) and
    /// [`script`](Self::script).
    ///
    /// Pages nested in output subdirectories use this to reach assets at the
    /// output root (e.g. `"../../"`).
    pub fn set_link_prefix(&mut self, prefix: impl Into<String>) {
        self.link_prefix = prefix.into();
    }

    /// Current indentation depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Tags currently open, outermost first.
    #[must_use]
    pub fn open_tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Text emitted so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the writer, failing if any tag is still open.
    pub fn finish(self) -> Result<String, MarkupError> {
        if self.tags.is_empty() {
            Ok(self.buf)
        } else {
            let names: Vec<&str> = self.tags.iter().copied().map(Tag::name).collect();
            Err(MarkupError::UnclosedTags(names.join(", ")))
        }
    }

    /// Consume the writer and return the text as-is.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    // ------------------------------------------------------------------
    // Raw text
    // ------------------------------------------------------------------

    /// Emit raw text.
    ///
    /// Embedded line breaks start new lines, each indented to the current depth.
    pub fn write(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.push_segment(first);
        }
        for line in lines {
            self.new_line();
            self.push_segment(line);
        }
    }

    /// Emit raw text followed by a line break.
    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.new_line();
    }

    /// Emit text verbatim, without indenting any of its lines.
    ///
    /// Use for preformatted content whose whitespace is significant.
    pub fn write_raw(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.buf.push_str(text);
        self.line_start = text.ends_with('\n');
    }

    /// Emit a line break.
    pub fn new_line(&mut self) {
        self.buf.push('\n');
        self.line_start = true;
    }

    fn push_segment(&mut self, segment: &str) {
        if segment.is_empty() {
            return;
        }
        if self.line_start {
            let width = self.depth * self.indent_width;
            self.buf.extend(std::iter::repeat_n(' ', width));
            self.line_start = false;
        }
        self.buf.push_str(segment);
    }

    // ------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------

    /// Emit an opening tag without tracking it on the stack.
    pub fn inline_tag(&mut self, tag: Tag, attrs: &[Attr<'_>]) {
        let open = format!("<{}{}>", tag.name(), render_attributes(attrs));
        self.write(&open);
    }

    /// Emit an opening tag and push it onto the stack.
    pub fn open_tag(&mut self, tag: Tag, attrs: &[Attr<'_>]) {
        self.inline_tag(tag, attrs);
        self.tags.push(tag);
    }

    /// Emit an opening tag, push it, break the line and indent.
    pub fn open_tag_indented(&mut self, tag: Tag, attrs: &[Attr<'_>]) {
        self.open_tag(tag, attrs);
        self.new_line();
        self.depth += 1;
    }

    /// Pop the most recently opened tag and emit its closing form.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::StackUnderflow`] if no tag is open.
    pub fn close_tag(&mut self) -> Result<(), MarkupError> {
        let tag = self.tags.pop().ok_or(MarkupError::StackUnderflow)?;
        self.end_tag(tag);
        Ok(())
    }

    /// Decrement indentation, then [`close_tag`](Self::close_tag).
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::StackUnderflow`] if no tag is open. The
    /// indentation is left untouched in that case.
    pub fn close_tag_indented(&mut self) -> Result<(), MarkupError> {
        if self.tags.is_empty() {
            return Err(MarkupError::StackUnderflow);
        }
        self.depth = self.depth.saturating_sub(1);
        self.close_tag()
    }

    /// Emit a closing tag and a line break without consulting the stack.
    pub fn end_tag(&mut self, tag: Tag) {
        let close = format!("</{}>", tag.name());
        self.write_line(&close);
    }

    /// Emit a closing tag without a line break and without consulting the stack.
    pub fn close_inline(&mut self, tag: Tag) {
        let close = format!("</{}>", tag.name());
        self.write(&close);
    }

    /// Emit `<tag attrs>text</tag>` on one logical line.
    pub fn content(&mut self, tag: Tag, text: &str, attrs: &[Attr<'_>]) {
        self.inline_tag(tag, attrs);
        self.write(text);
        self.end_tag(tag);
    }

    // ------------------------------------------------------------------
    // Element helpers
    // ------------------------------------------------------------------

    pub fn doctype(&mut self) {
        self.write_line("<!DOCTYPE html>");
    }

    pub fn comment(&mut self, text: &str) {
        self.write_line(&format!("<!-- {text} -->"));
    }

    /// Emit an opening `<a href=...>`; close it with [`close_inline`](Self::close_inline).
    pub fn anchor(&mut self, href: &str, attrs: &[Attr<'_>]) {
        let attrs = with_leading(("href", href), attrs);
        self.inline_tag(Tag::A, &attrs);
    }

    /// Emit a `<link>` whose href is prefixed with the writer's link prefix.
    pub fn link(&mut self, href: &str, attrs: &[Attr<'_>]) {
        let href = format!("{}{href}", self.link_prefix);
        let attrs = with_leading(("href", href.as_str()), attrs);
        self.inline_tag(Tag::Link, &attrs);
        self.new_line();
    }

    /// Emit an empty `<script src=...></script>` element.
    pub fn script(&mut self, src: &str, attrs: &[Attr<'_>]) {
        let src = format!("{}{src}", self.link_prefix);
        let attrs = with_leading(("src", src.as_str()), attrs);
        self.inline_tag(Tag::Script, &attrs);
        self.end_tag(Tag::Script);
    }

    pub fn javascript(&mut self, src: &str) {
        self.script(src, &[("type", "text/javascript")]);
    }

    /// Emit a Bootstrap glyph icon span.
    pub fn glyph_icon(&mut self, name: &str) {
        let classes = format!("glyphicon glyphicon-{name}");
        self.inline_tag(Tag::Span, &[("class", classes.as_str())]);
        self.close_inline(Tag::Span);
    }

    pub fn heading(&mut self, text: &str, level: u8) {
        self.content(Tag::heading(level), text, &[]);
    }

    pub fn paragraph(&mut self, text: &str) {
        self.content(Tag::P, text, &[]);
    }

    pub fn horizontal_rule(&mut self) {
        self.inline_tag(Tag::Hr, &[]);
        self.new_line();
    }

    pub fn line_break(&mut self) {
        self.inline_tag(Tag::Br, &[]);
        self.new_line();
    }

    /// Open an indented `<div>`.
    pub fn div(&mut self, attrs: &[Attr<'_>]) {
        self.open_tag_indented(Tag::Div, attrs);
    }

    /// Open an indented `<section>`.
    pub fn section(&mut self, attrs: &[Attr<'_>]) {
        self.open_tag_indented(Tag::Section, attrs);
    }
}

impl Default for MarkupWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render attributes as ` name='value' name='value'` (empty when none).
fn render_attributes(attrs: &[Attr<'_>]) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = attrs
        .iter()
        .map(|(name, value)| format!("{name}='{value}'"))
        .collect();
    format!(" {}", pairs.join(" "))
}

fn with_leading<'a>(first: Attr<'a>, rest: &[Attr<'a>]) -> Vec<Attr<'a>> {
    let mut attrs = Vec::with_capacity(rest.len() + 1);
    attrs.push(first);
    attrs.extend_from_slice(rest);
    attrs
}

/// Escape text for safe inclusion in HTML content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_open_tag_renders_attributes_in_order() {
        let mut w = MarkupWriter::new();
        w.open_tag(Tag::Div, &[("id", "main"), ("class", "a b"), ("data-x", "1")]);
        assert_eq!(w.as_str(), "<div id='main' class='a b' data-x='1'>");
        assert_eq!(w.open_tags(), &[Tag::Div]);
    }

    #[test]
    fn test_open_tag_without_attributes() {
        let mut w = MarkupWriter::new();
        w.open_tag(Tag::Ul, &[]);
        assert_eq!(w.as_str(), "<ul>");
    }

    #[test]
    fn test_nested_indentation() {
        let mut w = MarkupWriter::new();
        w.open_tag_indented(Tag::Body, &[]);
        w.open_tag_indented(Tag::Div, &[("class", "container")]);
        w.write_line("text");
        w.close_tag_indented().unwrap();
        w.close_tag_indented().unwrap();

        assert_eq!(
            w.finish().unwrap(),
            "<body>\n    <div class='container'>\n        text\n    </div>\n</body>\n"
        );
    }

    #[test]
    fn test_custom_indent_width() {
        let mut w = MarkupWriter::new().with_indent_width(2);
        w.div(&[]);
        w.paragraph("x");
        w.close_tag_indented().unwrap();
        assert_eq!(w.finish().unwrap(), "<div>\n  <p>x</p>\n</div>\n");
    }

    #[test]
    fn test_close_tag_on_empty_stack_underflows() {
        let mut w = MarkupWriter::new();
        assert_eq!(w.close_tag(), Err(MarkupError::StackUnderflow));
        assert_eq!(w.close_tag_indented(), Err(MarkupError::StackUnderflow));
        assert_eq!(w.depth(), 0);
        assert_eq!(w.as_str(), "");
    }

    #[test]
    fn test_close_tag_pops_most_recent() {
        let mut w = MarkupWriter::new();
        w.open_tag(Tag::Li, &[]);
        w.open_tag(Tag::Span, &[]);
        w.close_tag().unwrap();
        assert_eq!(w.open_tags(), &[Tag::Li]);
        w.close_tag().unwrap();
        assert_eq!(w.finish().unwrap(), "<li><span></span>\n</li>\n");
    }

    #[test]
    fn test_explicit_end_tag_leaves_stack_alone() {
        let mut w = MarkupWriter::new();
        w.open_tag(Tag::Div, &[]);
        w.end_tag(Tag::P);
        assert_eq!(w.open_tags(), &[Tag::Div]);
        assert_eq!(w.as_str(), "<div></p>\n");
    }

    #[test]
    fn test_content_single_line() {
        let mut w = MarkupWriter::new();
        w.content(Tag::Title, "Docs", &[]);
        w.content(Tag::Div, "Contents", &[("class", "nav-header")]);
        assert_eq!(
            w.finish().unwrap(),
            "<title>Docs</title>\n<div class='nav-header'>Contents</div>\n"
        );
    }

    #[test]
    fn test_write_multiline_indents_each_line() {
        let mut w = MarkupWriter::new();
        w.div(&[]);
        w.write_line("first\nsecond");
        w.close_tag_indented().unwrap();
        assert_eq!(
            w.finish().unwrap(),
            "<div>\n    first\n    second\n</div>\n"
        );
    }

    #[test]
    fn test_finish_reports_unclosed_tags() {
        let mut w = MarkupWriter::new();
        w.open_tag_indented(Tag::Html, &[]);
        w.open_tag(Tag::Body, &[]);
        assert_eq!(
            w.finish(),
            Err(MarkupError::UnclosedTags("html, body".to_owned()))
        );
    }

    #[test]
    fn test_link_uses_prefix() {
        let mut w = MarkupWriter::new();
        w.set_link_prefix("../../");
        w.link("css/docs.css", &[("rel", "stylesheet")]);
        w.javascript("js/jquery.js");
        assert_eq!(
            w.as_str(),
            "<link href='../../css/docs.css' rel='stylesheet'>\n\
             <script src='../../js/jquery.js' type='text/javascript'></script>\n"
        );
    }

    #[test]
    fn test_anchor_and_glyph() {
        let mut w = MarkupWriter::new();
        w.anchor("a/b.html", &[("class", "x")]);
        w.glyph_icon("home");
        w.write("Home");
        w.close_inline(Tag::A);
        assert_eq!(
            w.as_str(),
            "<a href='a/b.html' class='x'><span class='glyphicon glyphicon-home'></span>Home</a>"
        );
    }

    #[test]
    fn test_void_helpers() {
        let mut w = MarkupWriter::new();
        w.horizontal_rule();
        w.line_break();
        w.comment("Sidebar content");
        assert_eq!(w.as_str(), "<hr>\n<br>\n<!-- Sidebar content -->\n");
    }

    #[test]
    fn test_balanced_sequences_return_to_start() {
        let tags = [Tag::Div, Tag::Section, Tag::Ul, Tag::Li, Tag::Table];
        for depth in 1..=tags.len() {
            for siblings in 1..=3 {
                let mut w = MarkupWriter::new();
                for _ in 0..siblings {
                    for tag in &tags[..depth] {
                        w.open_tag_indented(*tag, &[("class", "c")]);
                    }
                    w.write_line("leaf");
                    for _ in 0..depth {
                        w.close_tag_indented().unwrap();
                    }
                }
                assert_eq!(w.depth(), 0);
                assert!(w.open_tags().is_empty());

                let out = w.finish().unwrap();
                for tag in &tags[..depth] {
                    let open = format!("<{} ", tag.name());
                    let close = format!("</{}>", tag.name());
                    assert_eq!(count(&out, &open), siblings);
                    assert_eq!(count(&out, &close), siblings);
                }
                assert_close_tags_aligned(&out);
            }
        }
    }

    /// Every closing line sits at the column of the line that opened it.
    fn assert_close_tags_aligned(out: &str) {
        let mut open_columns = Vec::new();
        for line in out.lines() {
            let trimmed = line.trim_start();
            let column = line.len() - trimmed.len();
            if trimmed.starts_with("</") {
                assert_eq!(open_columns.pop(), Some(column), "line {line:?} in\n{out}");
            } else if trimmed.starts_with('<') {
                open_columns.push(column);
            }
        }
        assert!(open_columns.is_empty(), "unclosed lines in\n{out}");
    }

    #[test]
    fn test_close_tags_align_with_openings_in_mixed_nesting() {
        let mut w = MarkupWriter::new();
        w.open_tag_indented(Tag::Div, &[("class", "row")]);
        w.open_tag_indented(Tag::Ul, &[]);
        w.open_tag_indented(Tag::Li, &[]);
        w.write_line("one");
        w.close_tag_indented().unwrap();
        w.open_tag_indented(Tag::Li, &[]);
        w.open_tag_indented(Tag::Section, &[]);
        w.write_line("two");
        w.close_tag_indented().unwrap();
        w.close_tag_indented().unwrap();
        w.close_tag_indented().unwrap();
        w.open_tag_indented(Tag::Table, &[]);
        w.close_tag_indented().unwrap();
        w.close_tag_indented().unwrap();

        let out = w.finish().unwrap();
        assert_close_tags_aligned(&out);
        assert!(out.contains("\n            </section>\n        </li>\n"));
    }

    #[test]
    fn test_write_raw_keeps_whitespace() {
        let mut w = MarkupWriter::new();
        w.div(&[]);
        w.write_raw("<pre>a\n  b\n</pre>\n");
        w.close_tag_indented().unwrap();

        assert_eq!(w.finish().unwrap(), "<div>\n<pre>a\n  b\n</pre>\n</div>\n");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"List<T> & "x" 'y'"#),
            "List&lt;T&gt; &amp; &quot;x&quot; &#39;y&#39;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
