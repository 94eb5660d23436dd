//! Rust language definition

use crate::config::{HighlightRule, Language};

/// Create Rust language definition
pub fn rust_language() -> Language {
    let keywords = r"\b(as|async|await|break|const|continue|crate|dyn|else|enum|extern|false|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|true|type|union|unsafe|use|where|while)\b";
    let types = r"\b(bool|char|str|u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize|f32|f64|String|Vec|Box|Rc|Arc|Option|Result|Some|None|Ok|Err)\b";

    Language::new(
        &["rs"],
        vec![
            // Comments first: everything after `//` belongs to them
            HighlightRule::new("line_comment", r"//.*$", "comment"),
            HighlightRule::new("block_comment", r"/\*.*?\*/", "comment"),
            HighlightRule::new("string", r#""(?:[^"\\]|\\.)*""#, "string"),
            HighlightRule::new("char", r"'(?:[^'\\]|\\.)'", "string"),
            HighlightRule::new("attribute", r"#!?\[[^\]]*\]", "attribute"),
            HighlightRule::new("macro", r"\b\w+!", "macro"),
            HighlightRule::new("keyword", keywords, "keyword"),
            HighlightRule::new("type", types, "type"),
            HighlightRule::new(
                "number",
                r"\b(?:0x[0-9a-fA-F_]+|0b[01_]+|0o[0-7_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)\b",
                "number",
            ),
        ],
        &[
            ("comment", "bright_black"),
            ("string", "green"),
            ("attribute", "bright_blue"),
            ("macro", "bright_cyan"),
            ("keyword", "magenta"),
            ("type", "yellow"),
            ("number", "cyan"),
        ],
    )
}
