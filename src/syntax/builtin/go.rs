//! Go language definition

use crate::config::{HighlightRule, Language};

/// Create Go language definition
pub fn go_language() -> Language {
    let keywords = r"\b(func|package|import|var|const|type|struct|interface|map|chan|go|defer|if|else|switch|case|for|range|return|break|continue)\b";

    Language::new(
        &["go"],
        vec![
            HighlightRule::new("keywords", keywords, "keyword"),
            HighlightRule::new("strings", r#""[^"]*""#, "string"),
            HighlightRule::new("comments", r"//.*|/\*[\s\S]*?\*/", "comment"),
            HighlightRule::new("numbers", r"\b\d+\b", "number"),
        ],
        &[
            ("keyword", "cyan"),
            ("string", "green"),
            ("comment", "yellow"),
            ("number", "magenta"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::LineHighlighter;

    #[test]
    fn test_go_keyword() {
        let hl = LineHighlighter::new(&go_language()).unwrap();
        assert_eq!(
            hl.highlight_line("package main"),
            "\x1b[36mpackage\x1b[0m main"
        );
    }
}
