//! C language definition

use crate::config::{HighlightRule, Language};

/// Create C language definition
pub fn c_language() -> Language {
    let keywords = r"\b(auto|break|case|char|const|continue|default|do|double|else|enum|extern|float|for|goto|if|inline|int|long|register|restrict|return|short|signed|sizeof|static|struct|switch|typedef|union|unsigned|void|volatile|while)\b";
    let types = r"\b(size_t|ptrdiff_t|intptr_t|uintptr_t|int8_t|int16_t|int32_t|int64_t|uint8_t|uint16_t|uint32_t|uint64_t|FILE|NULL)\b";

    Language::new(
        &["c", "h"],
        vec![
            HighlightRule::new("line_comment", r"//.*$", "comment"),
            HighlightRule::new("block_comment", r"/\*.*?\*/", "comment"),
            HighlightRule::new("preprocessor", r"^\s*#\s*\w+", "preprocessor"),
            HighlightRule::new("string", r#""(?:[^"\\]|\\.)*""#, "string"),
            HighlightRule::new("char", r"'(?:[^'\\]|\\.)'", "string"),
            HighlightRule::new("keyword", keywords, "keyword"),
            HighlightRule::new("type", types, "type"),
            HighlightRule::new("number", r"\b(?:0[xX][0-9a-fA-F]+|\d+(?:\.\d*)?)[uUlLfF]*\b", "number"),
        ],
        &[
            ("comment", "bright_black"),
            ("preprocessor", "bright_magenta"),
            ("string", "green"),
            ("keyword", "magenta"),
            ("type", "yellow"),
            ("number", "cyan"),
        ],
    )
}
