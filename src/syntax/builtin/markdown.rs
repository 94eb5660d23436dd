//! Markdown language definition

use crate::config::{HighlightRule, Language};

/// Create Markdown language definition
pub fn markdown_language() -> Language {
    Language::new(
        &["md", "markdown"],
        vec![
            HighlightRule::new("header", r"^#{1,6}\s+.*$", "header"),
            HighlightRule::new("blockquote", r"^>\s+.*$", "quote"),
            HighlightRule::new("code_fence", r"^```.*$", "code"),
            HighlightRule::new("inline_code", r"`[^`]+`", "code"),
            HighlightRule::new("bold", r"\*\*[^*]+\*\*|__[^_]+__", "bold"),
            HighlightRule::new("link", r"!?\[[^\]]+\]\([^)]+\)", "link"),
            HighlightRule::new("list", r"^\s*(?:[-*+]|\d+\.)\s", "list"),
        ],
        &[
            ("header", "magenta"),
            ("quote", "bright_black"),
            ("code", "green"),
            ("bold", "bold"),
            ("link", "blue"),
            ("list", "yellow"),
        ],
    )
}
