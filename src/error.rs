//! Error types for hilicat

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for hilicat operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("language not found: {0}")]
    LanguageNotFound(String),

    #[error("invalid regex pattern for {rule}: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("could not determine language for {}, use --lang", .0.display())]
    UnknownLanguage(PathBuf),

    #[error("--lang is required when reading from stdin")]
    MissingLanguage,

    #[error("failed to start pager {program}: {source}")]
    Pager {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_not_found_message() {
        let err = HighlightError::LanguageNotFound("cobol".to_string());
        assert_eq!(err.to_string(), "language not found: cobol");
    }

    #[test]
    fn test_invalid_pattern_names_rule() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = HighlightError::InvalidPattern {
            rule: "strings".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid regex pattern for strings:"));
    }

    #[test]
    fn test_unknown_language_mentions_path() {
        let err = HighlightError::UnknownLanguage(PathBuf::from("notes.xyz"));
        assert_eq!(
            err.to_string(),
            "could not determine language for notes.xyz, use --lang"
        );
    }
}
