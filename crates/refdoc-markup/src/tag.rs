//! HTML tag vocabulary.

/// HTML element emitted by [`MarkupWriter`](crate::MarkupWriter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Html,
    Head,
    Body,
    Title,
    Meta,
    Script,
    Link,
    Div,
    Section,
    Ul,
    Ol,
    Li,
    A,
    P,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Hr,
    Table,
    Tr,
    Td,
    Th,
    Span,
    Br,
    Pre,
    Code,
}

impl Tag {
    /// Lowercase element name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Head => "head",
            Self::Body => "body",
            Self::Title => "title",
            Self::Meta => "meta",
            Self::Script => "script",
            Self::Link => "link",
            Self::Div => "div",
            Self::Section => "section",
            Self::Ul => "ul",
            Self::Ol => "ol",
            Self::Li => "li",
            Self::A => "a",
            Self::P => "p",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Hr => "hr",
            Self::Table => "table",
            Self::Tr => "tr",
            Self::Td => "td",
            Self::Th => "th",
            Self::Span => "span",
            Self::Br => "br",
            Self::Pre => "pre",
            Self::Code => "code",
        }
    }

    /// Heading element for a level, clamped to `1..=6`.
    #[must_use]
    pub fn heading(level: u8) -> Self {
        match level {
            0 | 1 => Self::H1,
            2 => Self::H2,
            3 => Self::H3,
            4 => Self::H4,
            5 => Self::H5,
            _ => Self::H6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(Tag::heading(1), Tag::H1);
        assert_eq!(Tag::heading(4), Tag::H4);
        assert_eq!(Tag::heading(6), Tag::H6);
    }

    #[test]
    fn test_heading_level_clamped() {
        assert_eq!(Tag::heading(0), Tag::H1);
        assert_eq!(Tag::heading(9), Tag::H6);
    }

    #[test]
    fn test_name_is_lowercase() {
        assert_eq!(Tag::Html.name(), "html");
        assert_eq!(Tag::Th.name(), "th");
    }
}
