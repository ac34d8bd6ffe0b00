//! Block streams and section indexing for refdoc.
//!
//! A prose document arrives as an ordered stream of [`Block`]s (headings,
//! paragraphs, code blocks). [`build_index`] turns the headings of that
//! stream into a [`SectionTree`] used for in-page navigation, tolerating any
//! sequence of heading levels.
//!
//! The [`markdown`] module adapts markdown text into a block stream using
//! `pulldown-cmark`.
//!
//! # Example
//!
//! ```
//! use refdoc_sections::{Block, build_index};
//!
//! let blocks = vec![
//!     Block::heading(1, "Getting Started"),
//!     Block::paragraph("<p>Intro</p>"),
//!     Block::heading(2, "Install"),
//! ];
//! let tree = build_index(&blocks);
//!
//! let top = tree.children(tree.root())[0];
//! assert_eq!(tree.heading(top).unwrap().slug, "getting-started");
//! assert_eq!(tree.children(top).len(), 1);
//! ```

mod block;
mod index;
pub mod markdown;
mod slug;

pub use block::{Block, BlockKind, Document};
pub use index::{Heading, SectionId, SectionNode, SectionTree, build_index};
pub use slug::slug;
