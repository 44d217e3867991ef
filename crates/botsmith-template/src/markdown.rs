//! Markdown detection heuristic.
//!
//! A best-effort OR over common Markdown constructs, not a Markdown parser.
//! False positives and negatives are acceptable; the result only toggles a
//! formatting hint in the editor.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKDOWN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Emphasis and strong emphasis
        r"\*\*[^*\n]+\*\*",
        r"\*[^*\n]+\*",
        r"__[^_\n]+__",
        r"\b_[^_\n]+_\b",
        // Code spans and fenced blocks
        r"`[^`\n]+`",
        r"(?m)^\s*```",
        // Headings
        r"(?m)^#{1,6}\s+\S",
        // Lists
        r"(?m)^\s*[-*+]\s+\S",
        r"(?m)^\s*\d+\.\s+\S",
        // Block quotes
        r"(?m)^\s*>\s?\S",
        // Links
        r"\[[^\]\n]+\]\([^)\n]+\)",
        // Horizontal rules
        r"(?m)^\s*(-{3,}|\*{3,}|_{3,})\s*$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// True when any of the Markdown heuristics matches.
pub fn looks_like_markdown(text: &str) -> bool {
    MARKDOWN_PATTERNS.iter().any(|p| p.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_markdown() {
        assert!(!looks_like_markdown("plain text"));
        assert!(!looks_like_markdown("Hello {name}, your order shipped."));
    }

    #[test]
    fn test_emphasis() {
        assert!(looks_like_markdown("**bold**"));
        assert!(looks_like_markdown("some *emphasis* here"));
        assert!(looks_like_markdown("also _underscored_ words"));
    }

    #[test]
    fn test_code() {
        assert!(looks_like_markdown("run `make test` first"));
        assert!(looks_like_markdown("```\ncode block\n```"));
    }

    #[test]
    fn test_structure() {
        assert!(looks_like_markdown("# Heading"));
        assert!(looks_like_markdown("- item one\n- item two"));
        assert!(looks_like_markdown("1. first\n2. second"));
        assert!(looks_like_markdown("> quoted reply"));
        assert!(looks_like_markdown("intro\n---\noutro"));
    }

    #[test]
    fn test_links() {
        assert!(looks_like_markdown("see [the docs](https://example.com)"));
    }
}
