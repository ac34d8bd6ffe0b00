/// Derive the fragment identifier for a heading.
///
/// The text is split on whitespace, each token is lowercased and stripped of
/// everything but letters, digits and `-`, and the tokens are joined with
/// `-`. Tokens left empty by the stripping are kept, so `"A & B"` becomes
/// `"a--b"`.
#[must_use]
pub fn slug(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            token
                .to_lowercase()
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_slug_basic() {
        assert_eq!(slug("Getting Started"), "getting-started");
    }

    #[test]
    fn test_slug_strips_punctuation() {
        assert_eq!(slug("What's new?"), "whats-new");
        assert_eq!(slug("C# 2.0 (beta)"), "c-20-beta");
    }

    #[test]
    fn test_slug_keeps_empty_tokens() {
        assert_eq!(slug("A & B"), "a--b");
    }

    #[test]
    fn test_slug_collapses_whitespace() {
        assert_eq!(slug("  Tabs\tand   spaces  "), "tabs-and-spaces");
    }

    #[test]
    fn test_slug_keeps_hyphens_and_unicode() {
        assert_eq!(slug("Pre-Release Überblick"), "pre-release-überblick");
    }

    #[test]
    fn test_slug_empty() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("   "), "");
    }

    #[test]
    fn test_slug_is_stable() {
        let text = "Section 1: Overview";
        assert_eq!(slug(text), slug(text));
        assert!(
            slug(text)
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-')
        );
    }
}
