//! Rule compilation
//!
//! Turns the declarative `{name, pattern, style}` rules of a language
//! into compiled matchers. Compilation is all-or-nothing: the first bad
//! pattern fails the whole language.

use regex::Regex;

use crate::config::HighlightRule;
use crate::error::{HighlightError, Result};

/// A highlight rule with its pattern compiled
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Rule name, used in error messages
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Style name, looked up in the language's style table
    pub style: String,
}

impl CompiledRule {
    /// Compile a single rule
    pub fn new(rule: &HighlightRule) -> Result<Self> {
        let pattern = Regex::new(&rule.pattern).map_err(|source| HighlightError::InvalidPattern {
            rule: rule.name.clone(),
            source,
        })?;

        Ok(Self {
            name: rule.name.clone(),
            pattern,
            style: rule.style.clone(),
        })
    }

    /// All non-overlapping matches in `text`, as byte ranges
    pub fn find_all<'t>(&'t self, text: &'t str) -> impl Iterator<Item = (usize, usize)> + 't {
        self.pattern.find_iter(text).map(|m| (m.start(), m.end()))
    }
}

/// Compile rules in declaration order, stopping at the first invalid pattern
pub fn compile(rules: &[HighlightRule]) -> Result<Vec<CompiledRule>> {
    rules.iter().map(CompiledRule::new).collect()
}
