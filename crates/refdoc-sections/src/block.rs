//! Block stream model.

use crate::index::{SectionTree, build_index};
use crate::markdown;

/// Kind of a content block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockKind {
    /// Heading with its level (1..=6).
    Heading(u8),
    Paragraph,
    /// Code block with an optional language from the fence info string.
    Code { lang: Option<String> },
    /// Any other block (lists, tables, quotes, rules, raw HTML).
    Other,
}

/// One block of a prose document.
///
/// `text` is the heading's plain text for headings, the raw source for code
/// blocks and a rendered HTML fragment for everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading(level), text)
    }

    pub fn paragraph(html: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, html)
    }

    pub fn code(lang: Option<&str>, source: impl Into<String>) -> Self {
        Self::new(
            BlockKind::Code {
                lang: lang.map(str::to_owned),
            },
            source,
        )
    }

    pub fn other(html: impl Into<String>) -> Self {
        Self::new(BlockKind::Other, html)
    }

    /// Heading level, or `None` for non-heading blocks.
    #[must_use]
    pub fn heading_level(&self) -> Option<u8> {
        match self.kind {
            BlockKind::Heading(level) => Some(level),
            _ => None,
        }
    }
}

/// A titled prose document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Display title, also used to name the output page.
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            blocks,
        }
    }

    /// Parse markdown text into a document.
    pub fn from_markdown(title: impl Into<String>, text: &str) -> Self {
        Self::new(title, markdown::parse_blocks(text))
    }

    /// Build the section tree for this document's headings.
    #[must_use]
    pub fn index(&self) -> SectionTree {
        build_index(&self.blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level() {
        assert_eq!(Block::heading(3, "Usage").heading_level(), Some(3));
        assert_eq!(Block::paragraph("<p>x</p>").heading_level(), None);
        assert_eq!(Block::code(Some("rust"), "fn main() {}").heading_level(), None);
    }

    #[test]
    fn test_document_index() {
        let doc = Document::new(
            "Guide",
            vec![Block::heading(1, "Intro"), Block::heading(2, "Setup")],
        );
        let tree = doc.index();
        assert_eq!(tree.len(), 2);
    }
}
