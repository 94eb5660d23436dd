//! TOML language definition

use crate::config::{HighlightRule, Language};

/// Create TOML language definition
pub fn toml_language() -> Language {
    Language::new(
        &["toml"],
        vec![
            HighlightRule::new("comment", r"#.*$", "comment"),
            HighlightRule::new("table", r"^\s*\[\[?[^\]]+\]\]?", "keyword"),
            HighlightRule::new("key", r"^\s*[\w\-\.]+\s*=", "key"),
            HighlightRule::new("string", r#""(?:[^"\\]|\\.)*"|'[^']*'"#, "string"),
            HighlightRule::new("boolean", r"\b(true|false)\b", "constant"),
            HighlightRule::new("number", r"\b\d[\d_]*(?:\.\d[\d_]*)?\b", "number"),
        ],
        &[
            ("comment", "bright_black"),
            ("keyword", "magenta"),
            ("key", "yellow"),
            ("string", "green"),
            ("constant", "bright_red"),
            ("number", "cyan"),
        ],
    )
}
