//! Markdown to block stream adapter.
//!
//! Each top-level markdown element becomes one [`Block`]. Headings keep their
//! plain text, fenced and indented code keeps its raw source, and every other
//! element is rendered to an HTML fragment with `pulldown-cmark`.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, html};

use crate::block::{Block, BlockKind};

/// Parser options used for documents (GitHub-flavored extensions).
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Split markdown text into top-level blocks.
#[must_use]
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut kind = BlockKind::Other;
    let mut events: Vec<Event<'_>> = Vec::new();

    for event in Parser::new_ext(markdown, parser_options()) {
        match event {
            Event::Start(tag) => {
                if depth == 0 {
                    kind = block_kind(&tag);
                }
                depth += 1;
                events.push(Event::Start(tag));
            }
            Event::End(tag) => {
                depth = depth.saturating_sub(1);
                events.push(Event::End(tag));
                if depth == 0 {
                    blocks.push(finish_block(&kind, std::mem::take(&mut events)));
                }
            }
            // Standalone top-level events such as thematic breaks.
            other if depth == 0 => blocks.push(finish_block(&BlockKind::Other, vec![other])),
            other => events.push(other),
        }
    }

    blocks
}

fn block_kind(tag: &Tag<'_>) -> BlockKind {
    match tag {
        Tag::Heading { level, .. } => BlockKind::Heading(heading_level_to_num(*level)),
        Tag::Paragraph => BlockKind::Paragraph,
        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => BlockKind::Code {
            lang: info.split_whitespace().next().map(str::to_owned),
        },
        Tag::CodeBlock(CodeBlockKind::Indented) => BlockKind::Code { lang: None },
        _ => BlockKind::Other,
    }
}

fn finish_block(kind: &BlockKind, events: Vec<Event<'_>>) -> Block {
    match kind {
        BlockKind::Heading(_) => Block::new(kind.clone(), plain_text(&events)),
        BlockKind::Code { .. } => Block::new(kind.clone(), code_text(&events)),
        BlockKind::Paragraph | BlockKind::Other => {
            let mut out = String::new();
            html::push_html(&mut out, events.into_iter());
            let len = out.trim_end().len();
            out.truncate(len);
            Block::new(kind.clone(), out)
        }
    }
}

fn plain_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

fn code_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        if let Event::Text(t) = event {
            text.push_str(t);
        }
    }
    text
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_headings_and_paragraphs() {
        let blocks = parse_blocks("# Title\n\nSome *text*.\n\n## Part `two`\n");

        assert_eq!(
            blocks,
            vec![
                Block::heading(1, "Title"),
                Block::paragraph("<p>Some <em>text</em>.</p>"),
                Block::heading(2, "Part two"),
            ]
        );
    }

    #[test]
    fn test_parse_fenced_code() {
        let blocks = parse_blocks("```rust ignore\nfn main() {}\n```\n");

        assert_eq!(blocks, vec![Block::code(Some("rust"), "fn main() {}\n")]);
    }

    #[test]
    fn test_parse_indented_code() {
        let blocks = parse_blocks("    let x = 1;\n");

        assert_eq!(blocks, vec![Block::code(None, "let x = 1;\n")]);
    }

    #[test]
    fn test_parse_list_is_other() {
        let blocks = parse_blocks("- one\n- two\n");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Other);
        assert!(blocks[0].text.starts_with("<ul>"));
        assert!(blocks[0].text.contains("<li>two</li>"));
    }

    #[test]
    fn test_parse_rule() {
        let blocks = parse_blocks("first\n\n---\n\nsecond\n");

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].kind, BlockKind::Other);
        assert!(blocks[1].text.starts_with("<hr"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_blocks("").is_empty());
    }

    #[test]
    fn test_parser_options_gfm() {
        let options = parser_options();
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(options.contains(Options::ENABLE_TASKLISTS));
    }
}
