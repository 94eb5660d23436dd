//! Python language definition

use crate::config::{HighlightRule, Language};

/// Create Python language definition
pub fn python_language() -> Language {
    let keywords = r"\b(False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b";
    let builtins = r"\b(abs|all|any|bool|dict|enumerate|filter|float|format|getattr|hasattr|int|isinstance|iter|len|list|map|max|min|next|object|open|print|range|repr|reversed|set|sorted|str|sum|super|tuple|type|zip)\b";

    Language::new(
        &["py", "pyw"],
        vec![
            HighlightRule::new("comment", r"#.*$", "comment"),
            HighlightRule::new("double_string", r#""(?:[^"\\]|\\.)*""#, "string"),
            HighlightRule::new("single_string", r"'(?:[^'\\]|\\.)*'", "string"),
            HighlightRule::new("decorator", r"@\w+", "attribute"),
            HighlightRule::new("keyword", keywords, "keyword"),
            HighlightRule::new("self", r"\b(self|cls)\b", "special"),
            HighlightRule::new("builtin", builtins, "function"),
            HighlightRule::new("number", r"\b(?:0[xX][0-9a-fA-F_]+|\d[\d_]*(?:\.\d[\d_]*)?j?)\b", "number"),
        ],
        &[
            ("comment", "bright_black"),
            ("string", "green"),
            ("attribute", "bright_blue"),
            ("keyword", "magenta"),
            ("special", "bright_yellow"),
            ("function", "blue"),
            ("number", "cyan"),
        ],
    )
}
