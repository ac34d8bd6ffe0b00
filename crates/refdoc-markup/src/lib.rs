//! Indentation-aware HTML markup writer.
//!
//! This crate provides [`MarkupWriter`], a stateful text emitter that tracks
//! open tags on a stack and indents nested content, plus a small
//! [`TableBuilder`] for the summary tables used by generated reference pages.
//!
//! # Escaping
//!
//! The writer emits attribute values and text verbatim. Callers that pass
//! symbol names or documentation text must escape them with [`escape_html`]
//! first.
//!
//! # Example
//!
//! ```
//! use refdoc_markup::{MarkupWriter, Tag};
//!
//! let mut w = MarkupWriter::new();
//! w.open_tag_indented(Tag::Div, &[("class", "row")]);
//! w.content(Tag::P, "Hello", &[]);
//! w.close_tag_indented()?;
//!
//! assert_eq!(w.finish()?, "<div class='row'>\n    <p>Hello</p>\n</div>\n");
//! # Ok::<(), refdoc_markup::MarkupError>(())
//! ```

mod error;
mod table;
mod tag;
mod writer;

pub use error::MarkupError;
pub use table::TableBuilder;
pub use tag::Tag;
pub use writer::{Attr, DEFAULT_INDENT_WIDTH, MarkupWriter, escape_html};
