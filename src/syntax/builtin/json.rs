//! JSON language definition

use crate::config::{HighlightRule, Language};

/// Create JSON language definition
pub fn json_language() -> Language {
    Language::new(
        &["json"],
        vec![
            HighlightRule::new("keys", r#""[^"]*"\s*:"#, "key"),
            HighlightRule::new("strings", r#":\s*"[^"]*""#, "string"),
            HighlightRule::new("numbers", r":\s*\d+", "number"),
            HighlightRule::new("booleans", r":\s*(true|false|null)", "boolean"),
        ],
        &[
            ("key", "cyan"),
            ("string", "green"),
            ("number", "magenta"),
            ("boolean", "yellow"),
        ],
    )
}
