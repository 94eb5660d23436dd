//! Built-in language definitions
//!
//! These are written to the config file on first run and used in memory
//! when no config file can be created.

mod c;
mod go;
mod json;
mod markdown;
mod python;
mod rust;
mod toml_lang;

use crate::config::Language;

/// Get all built-in language definitions, keyed by language id
pub fn all_languages() -> Vec<(&'static str, Language)> {
    vec![
        ("go", go::go_language()),
        ("json", json::json_language()),
        ("rust", rust::rust_language()),
        ("c", c::c_language()),
        ("python", python::python_language()),
        ("toml", toml_lang::toml_language()),
        ("markdown", markdown::markdown_language()),
    ]
}
